//! Checks shared by the unit tests, the property tests and the fuzz target
//! (which can be found in the `fuzz/` directory).
