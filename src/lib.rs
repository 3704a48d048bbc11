//! Romforge - ROM image bank and interleave toolkit
//!
//! Transforms fixed-size binary ROM images (arcade/console cartridge dumps)
//! the way flash-cartridge and preservation workflows need them: split into
//! chip-sized fragments, interleaved back together, concatenated across
//! fixed-capacity storage banks, patched, padded and checksummed.
//!
//! ## Operations
//!
//! ```text
//! split-half / split-bytes / split-words   one image -> two fragments
//! merge / merge4                           fragments -> one interleaved image
//! flip / swap                              byte order / half order rewrites
//! concat / concat-words / concat-banked    two images -> one file or prom banks
//! patch                                    overlay one image's prefix onto another
//! pad                                      extend to a target size with a fill byte
//! info                                     size + crc32 report line
//! ```
//!
//! Every operation loads its inputs fully into memory, runs exactly one pure
//! transform from [`transform`], and persists the result through [`store`].
//! Preconditions (equal lengths, even lengths, capacity bounds) are checked
//! before any output file is touched, so a failed operation never leaves a
//! partial file behind.
//!
//! ## Example
//!
//! ```no_run
//! use romforge::cli::{merge_files, split_file, SplitMode};
//! use std::path::Path;
//!
//! // Split a 16-bit ROM into its even and odd byte lanes...
//! split_file(
//!     Path::new("game.p1"),
//!     Path::new("game.even"),
//!     Path::new("game.odd"),
//!     SplitMode::Bytes,
//! ).unwrap();
//!
//! // ...and interleave them back together.
//! merge_files(
//!     Path::new("game.even"),
//!     Path::new("game.odd"),
//!     Path::new("game.rebuilt"),
//! ).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod store;
pub mod transform;

pub use error::{Result, RomforgeError};
pub use transform::bank::{bank_split, BankPair, BANK_CAPACITY};
pub use transform::checksum::checksum;
