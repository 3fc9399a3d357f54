/// Configuration for input flood protection on the game socket.
/// All values are counts per second.
pub const MAX_REQUESTS_PER_SECOND: u32 = 30;
