/// Whoever issued a command: a player or the server console.
pub trait CommandSender: Send + Sync {
    fn name(&self) -> &str;
    fn is_console(&self) -> bool;
    fn has_permission(&self, node: &str) -> bool;
    fn send_message(&self, message: &str);
}

/// View of the players currently connected to the server.
pub trait PlayerDirectory: Send + Sync {
    fn online_players(&self) -> Vec<String>;

    /// Disconnect `name` with `message`. Returns `false` if the player is not online.
    fn kick(&self, name: &str, message: &str) -> bool;
}
