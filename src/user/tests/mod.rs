//! Unit tests for the user directory.
