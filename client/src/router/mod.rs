//! Route table and navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `table` describes which paths exist and what they require; `guard` turns
//! that plus the auth store into a proceed/redirect decision per navigation.

pub mod guard;
pub mod table;
