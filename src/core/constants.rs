// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u32 = 10;
/// Manager automation scan runs every N production ticks (0.2s).
pub const MANAGER_SCAN_TICKS: u32 = 2;
/// Device timers fire when they drop under one tick of remaining time.
pub const TIMER_EPSILON: f64 = 0.11;
pub const MIN_TIMER_SECONDS: f64 = 0.1;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Words and letters
pub const MIN_WORD_LENGTH: usize = 2;
pub const BASE_MAX_LETTERS: u32 = 50;
pub const MAX_LETTERS_PER_LEVEL: u32 = 25;
/// Returned when floating point exhausts the frequency table.
pub const FALLBACK_LETTER: char = 'E';

// Special-tile base roll chances (additive upgrade offsets stack on top)
pub const DOUBLE_LETTER_BASE_CHANCE: f64 = 0.015;
pub const TRIPLE_LETTER_BASE_CHANCE: f64 = 0.005;
pub const DOUBLE_WORD_BASE_CHANCE: f64 = 0.008;
pub const TRIPLE_WORD_BASE_CHANCE: f64 = 0.002;
pub const GOLDEN_BASE_CHANCE: f64 = 0.0005;
pub const LEXICOIN_BASE_CHANCE: f64 = 0.003;

// Wells
pub const MAX_WELLS: usize = 5;
pub const WELL_BASE_CAPACITY: f64 = 10.0;
pub const WELL_CAPACITY_RATIO: f64 = 1.35;
pub const WELL_BASE_FILL_RATE: f64 = 0.5;
pub const WELL_FILL_RATE_RATIO: f64 = 1.08;
pub const WELL_BASE_CRIT_CHANCE: f64 = 0.05;
pub const WELL_CRIT_CHANCE_PER_LEVEL: f64 = 0.01;
pub const WELL_BASE_CRIT_MULT: f64 = 2.0;
pub const WELL_CRIT_MULT_PER_LEVEL: f64 = 0.25;
/// Ink cost of the n-th well: BASE * RATIO^(owned - 1). The first well is free.
pub const WELL_BASE_COST: f64 = 100.0;
pub const WELL_COST_RATIO: f64 = 12.0;
/// Managed wells wait this long between filling up and crediting the ink.
pub const MANAGER_COLLECT_SECONDS: f64 = 2.0;
pub const WELL_MANAGER_BASE_COST: f64 = 500.0;
pub const WELL_MANAGER_COST_RATIO: f64 = 8.0;

// Presses
pub const MAX_PRESSES: usize = 5;
pub const PRESS_BASE_INTERVAL: f64 = 12.0;
pub const PRESS_INTERVAL_RATIO: f64 = 0.93;
pub const PRESS_MIN_INTERVAL: f64 = 0.5;
pub const PRESS_BASE_YIELD: f64 = 1.0;
pub const PRESS_YIELD_PER_LEVEL: f64 = 0.5;
pub const PRESS_BASE_COST: f64 = 50.0;
pub const PRESS_COST_RATIO: f64 = 10.0;
pub const PRESS_MANAGER_BASE_COST: f64 = 750.0;
pub const PRESS_MANAGER_COST_RATIO: f64 = 8.0;

// Monkeys (auto-word-finder)
pub const MONKEY_BASE_SEARCH_SECONDS: f64 = 30.0;
pub const MONKEY_SEARCH_RATIO: f64 = 0.9;
pub const MONKEY_BASE_FIND_CHANCE: f64 = 0.25;
pub const MONKEY_FIND_CHANCE_PER_LEVEL: f64 = 0.05;
pub const GIBBERISH_MIN_LEN: usize = 3;
pub const GIBBERISH_MAX_LEN: usize = 6;

// Publish rewards
pub const QUILLS_PER_NEW_WORD: f64 = 0.1;
pub const QUILLS_PER_SCORE_POINT: f64 = 0.05;
pub const TOP_WORDS_COUNT: usize = 10;
pub const TOP_WORDS_DIVISOR: f64 = 100.0;

// Offline progression
pub const MAX_OFFLINE_SECONDS: u64 = 8 * 60 * 60;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x494E_4B50_5253_0001;
