//! Exhaustive pairing scheduler for two rosters.
//!
//! Generates a fair schedule in which every member of one roster meets
//! every member of the other exactly once, records each participant's
//! ordered opponent history, and lays both out as block-structured
//! grids for spreadsheet export.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Participant`, `Roster`, `Pair`,
//!   `Round`, `Schedule`, `OpponentRecord`, `OpponentHistory`
//! - **`balance`**: Roster balancing with placeholder ("bye") insertion
//! - **`rotation`**: Circle-method round construction
//! - **`history`**: Per-participant opponent aggregation
//! - **`export`**: Block grid layout and the .xlsx writer
//! - **`pipeline`**: One-call balance → rotate → aggregate generation
//! - **`validation`**: Advisory roster integrity checks
//!
//! # Architecture
//!
//! Everything is a pure, synchronous transformation over immutable
//! input snapshots: balancing feeds rotation, rotation feeds
//! aggregation, and both feed the export layout. The only mutable state
//! is the caller-owned placeholder counter.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling — a survey"
//! - Lucas (1883), "Récréations Mathématiques", Vol. 2 (the circle method)

pub mod balance;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod rotation;
pub mod validation;
