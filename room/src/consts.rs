pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 54321;

pub const MAX_TURNS: u32 = 5;
pub const ROUND_SECS: u32 = 30;

pub const TICK_DURATION: tokio::time::Duration = tokio::time::Duration::from_secs(1);
pub const HB_DURATION: tokio::time::Duration = tokio::time::Duration::from_secs(10);

pub const ROOM_QUEUE: usize = 256;
pub const PLAYER_QUEUE: usize = 128;

pub const FIRST_GUESS_POINTS: u32 = 15;
pub const GUESS_POINTS: u32 = 10;
pub const DRAWER_BONUS: u32 = 10;

pub const WORDS: [&str; 40] = [
    "computer", "apple", "tree", "car", "love", "tulip", "puppy", "cat", "school", "hand",
    "perfume", "microphone", "bed", "book", "cane", "power strip", "pencil", "key", "footprint",
    "washing machine", "olympics", "soccer", "baseball", "smartphone", "youtube", "light bulb",
    "toothbrush", "eiffel tower", "fan", "scissors", "grape", "tanghulu", "hospital", "doctor",
    "judge", "police", "long jump", "badminton", "table tennis", "mouse",
];
