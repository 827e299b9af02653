//! Status lines shown to the player.
//!
//! Each constant is paired with the accent flag it is shown with.

pub const IDLE: (&str, bool) = ("Tap start to begin", false);
pub const STARTING: (&str, bool) = ("Here comes the pattern…", true);
pub const MEMORIZE: (&str, bool) = ("Memorize the pattern…", true);
pub const YOUR_TURN: (&str, bool) = ("Your turn!", true);
pub const ROUND_COMPLETE: (&str, bool) = ("Nice! Next round…", true);
pub const MISSED: (&str, bool) = ("Missed it! Try again.", false);
pub const WATCH_AGAIN: (&str, bool) = ("Watch closely…", false);
pub const STRICT_RESET: (&str, bool) = ("Strict mode reset. Tap start!", false);
pub const STRICT_ON: (&str, bool) = ("Strict mode on. No mistakes!", true);
