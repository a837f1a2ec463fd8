use tracing::info;

use gavel_core::context::builders::ban_context;
use gavel_core::{ContextProperties, Data, Error, Message};
use gavel_utils::time::{format_date, now_utc};

/// Record the joining player and decide whether they may connect.
///
/// Returns the rendered ban screen when an active ban exists, `None` otherwise.
pub async fn screen_login(data: &Data, player_name: &str) -> Result<Option<String>, Error> {
    let account = data.bans.record_login(player_name).await?;

    let Some(ban) = data.bans.active_ban(&account.name, now_utc()).await? else {
        return Ok(None);
    };

    info!(
        ban_id = ban.id,
        player = %account.name,
        until = %format_date(ban.until),
        "refused login of banned player"
    );

    let ctx = ContextProperties::of(ban_context(&ban))?;
    Ok(Some(data.messages.receive_with(&ctx, Message::BanMessage)?))
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::screen_login;
    use crate::testing::data_with;

    #[tokio::test]
    async fn unbanned_players_may_join_and_get_an_account() {
        let (data, _players) = data_with(&[], &[]);

        assert_eq!(screen_login(&data, "Steve").await.unwrap(), None);

        let until = gavel_utils::time::now_utc() + Duration::days(1);
        assert!(data.bans.ban_player("steve", "CONSOLE", until, "test").await.is_ok());
    }

    #[tokio::test]
    async fn banned_players_see_the_ban_screen() {
        let (data, _players) = data_with(&["Steve"], &[]);
        let until = gavel_utils::time::now_utc() + Duration::days(2);
        data.bans
            .ban_player("Steve", "Alex", until, "griefing")
            .await
            .unwrap();

        let screen = screen_login(&data, "STEVE").await.unwrap().expect("login refused");

        assert!(screen.contains(&gavel_utils::time::format_date(until)));
        assert!(screen.contains("griefing"));
        assert!(screen.contains("Alex"));
    }

    #[tokio::test]
    async fn expired_bans_do_not_block() {
        let (data, _players) = data_with(&["Steve"], &[]);
        let until = gavel_utils::time::now_utc() - Duration::seconds(1);
        data.bans
            .ban_player("Steve", "Alex", until, "griefing")
            .await
            .unwrap();

        assert_eq!(screen_login(&data, "Steve").await.unwrap(), None);
    }
}
