use gavel_core::{CommandSender, ContextProperties, Data, Error, Message, Pair};

/// Send `message` to `sender` without placeholder substitution.
pub(crate) fn say(data: &Data, sender: &dyn CommandSender, message: Message) -> Result<(), Error> {
    sender.send_message(&data.messages.receive(message)?);
    Ok(())
}

/// Send `message` to `sender`, filling placeholders from `pairs`.
pub(crate) fn say_with(
    data: &Data,
    sender: &dyn CommandSender,
    pairs: Vec<Pair>,
    message: Message,
) -> Result<(), Error> {
    let ctx = ContextProperties::of(pairs)?;
    sender.send_message(&data.messages.receive_with(&ctx, message)?);
    Ok(())
}
