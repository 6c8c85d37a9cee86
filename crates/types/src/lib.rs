//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both games. All types are
//! plain data with no external dependencies, so they can be used from core
//! logic, terminal rendering and input mapping alike.
//!
//! # Blocks Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centred, row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity floor |
//! | `REVEAL_DELAY_MS` | 1000 | Pause before a flipped pair is resolved |
//! | `MISMATCH_HIDE_MS` | 1500 | How long a mismatch stays face-up |
//! | `COMPUTER_THINK_MS` | 1000 | Delay before each computer turn |
//! | `COMPUTER_SECOND_FLIP_MS` | 800 | Delay between the computer's two flips |
//!
//! # Examples
//!
//! ```
//! use tui_minigames_types::{BlocksAction, Difficulty, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(BlocksAction::from_str("hardDrop"), Some(BlocksAction::HardDrop));
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per cleared row, multiplied by rows cleared and the current level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Cleared rows needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of cards on the pairs table
pub const DECK_SIZE: usize = 52;

/// Number of pairs on the pairs table; the game ends when all are matched
pub const PAIR_COUNT: usize = DECK_SIZE / 2;

/// Pause between the second flip and resolving the pair
pub const REVEAL_DELAY_MS: u32 = 1000;

/// How long a mismatched pair stays face-up before it is hidden again
pub const MISMATCH_HIDE_MS: u32 = 1500;

/// Delay before the computer starts a turn
pub const COMPUTER_THINK_MS: u32 = 1000;

/// Delay between the computer's first and second flip
pub const COMPUTER_SECOND_FLIP_MS: u32 = 800;

/// Number of most recent memory entries a normal-difficulty opponent consults
pub const NORMAL_MEMORY_WINDOW: usize = 20;


/// The seven falling-block shapes
///
/// Each kind doubles as the colour id of the cells it leaves on the board:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
/// - **S**: Green
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tui_minigames_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Commands accepted by the falling-block game
///
/// These are produced by the key map and applied with
/// `BlocksGame::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlocksAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step piece one cell down (locks if blocked)
    SoftDrop,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over with an empty board
    Restart,
}

impl BlocksAction {
    /// Parse action from a camelCase or lowercase name
    ///
    /// ```
    /// use tui_minigames_types::BlocksAction;
    ///
    /// assert_eq!(BlocksAction::from_str("moveLeft"), Some(BlocksAction::MoveLeft));
    /// assert_eq!(BlocksAction::from_str("rotate"), Some(BlocksAction::Rotate));
    /// assert_eq!(BlocksAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(BlocksAction::MoveLeft),
            "moveright" => Some(BlocksAction::MoveRight),
            "softdrop" => Some(BlocksAction::SoftDrop),
            "harddrop" => Some(BlocksAction::HardDrop),
            "rotate" => Some(BlocksAction::Rotate),
            "pause" => Some(BlocksAction::Pause),
            "restart" => Some(BlocksAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlocksAction::MoveLeft => "moveLeft",
            BlocksAction::MoveRight => "moveRight",
            BlocksAction::SoftDrop => "softDrop",
            BlocksAction::HardDrop => "hardDrop",
            BlocksAction::Rotate => "rotate",
            BlocksAction::Pause => "pause",
            BlocksAction::Restart => "restart",
        }
    }
}

/// A cell on the blocks board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled, coloured after the piece that left it
pub type Cell = Option<PieceKind>;

/// Card suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Card rank, ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face label as printed on the card
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Computer opponent strength in the pairs game
///
/// - **Easy**: never consults memory
/// - **Normal**: consults the last `NORMAL_MEMORY_WINDOW` memory entries
/// - **Hard**: consults the whole memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

/// Which mismatches feed the computer's memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryPolicy {
    /// Mismatches from either side are remembered
    #[default]
    Both,
    /// Only mismatches revealed on the human's turn are remembered
    HumanOnly,
}

impl MemoryPolicy {
    /// Parse policy from string: "both" or "human-only" / "human"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "both" => Some(MemoryPolicy::Both),
            "human-only" | "human_only" | "human" => Some(MemoryPolicy::HumanOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryPolicy::Both => "both",
            MemoryPolicy::HumanOnly => "human-only",
        }
    }

    /// Whether a mismatch revealed by `side` should be remembered
    pub fn records(&self, side: Side) -> bool {
        match self {
            MemoryPolicy::Both => true,
            MemoryPolicy::HumanOnly => side == Side::Human,
        }
    }
}

/// The two players of the pairs game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Computer => "computer",
        }
    }
}

/// Final result of a completed pairs game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// Compare final tallies
    pub fn from_scores(human: u32, computer: u32) -> Self {
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Outcome::HumanWins,
            std::cmp::Ordering::Less => Outcome::ComputerWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
