//! Compiled-in macro content, loaded into the pools once at construction.
//!
//! Sequences are written in wire form, sub-commands separated by `|`.

/// Default content of a pool, one entry per slot starting at slot 0
pub type DefaultContent = &'static [&'static str];

/// Scooter
pub const SCOOTER: &str = "M300 S1567 P206|M300 S1567 P206|M300 S1396 P103|M300 S1318 P103|M300 S1396 P413|M300 S1174 P310|M300 S1046 P103|M300 S1174 P206|M300 S1567 P206|M300|S1567 P206|M300 S1396 P206|M300 S1318 P206|M300 S1567 P206|M300 S1567 P206|M300 S1396 P103|M300 S1318 P103|M300 S1396 P413|M300 S1174 P413|M300 S1318|P206|M300 S1046 P206|M300 S1174 P827|M300 S0 P206";

/// Star Trek
pub const STARTREK: &str = "M300 S1396 P714|M300 S932 P238|M300 S2489 P1428|M300 S2349 P476|M300 S932 P357|M300 S1567 P357|M300 S2093 P357|M300 S2793 P952";

/// Star Wars
pub const STARWARS: &str = "M300 S1396 P166|M300 S1396 P166|M300 S1396 P166|M300 S932 P1000|M300 S2793 P1000|M300 S2489 P166|M300 S2349 P166|M300 S2093 P166|M300 S1864 P1000|M300|S2793 P500|M300 S2489 P166|M300 S2349 P166|M300 S2093 P166|M300 S1864 P1000|M300 S2793 P500|M300 S2489 P166|M300 S2349 P166|M300 S2489 P166|S2093 P666|M300 S0 P333|M300 S1396 P166|M300 S1396 P166|M300 S1396 P166|M300 S932 P1000|M300 S2793 P1000|M300 S2489 P166|M300 S2349 P166|M300 S2093 P166|M300 S1864 P1000|M300 S2793 P500|M300 S2489 P166|M300 S2349 P166|M300 S2093 P166|M300 S1864 P1000|M300 S2793 P500|M300 S2489 P166|M300 S2349 P166|M300 S2489 P166|M300 S2093 P666";

/// Mario
pub const MARIO: &str = "M300 S0 P600|M300 S1046 P450|M300 S1567 P150|M300 S0 P300|M300 S1318 P300|M300 S0 P150|M300 S880 P300|M300 S987 P150|M300 S0 P150|M300 S932 P150|M300 S880 P300|M300 S1567 P450|M300 S2637 P300|M300 S3135 P300|M300 S1760 P300|M300 S2637 P150|M300 S3135 P150|M300 S0 P150|M300 S2637 P300|M300 S2093 P150|M300 S2349 P150|M300 S987 P450|M300 S2093 P450|M300 S1567 P150|M300 S0 P300|M300 S1318 P300|M300 S0 P150|M300 S880 P300|M300 S987 P150|M300 S0 P150|M300 S932 P150|M300 S880 P300|M300 S1567 P300|M300 S2637 P300|M300 S3135 P300|M300 S1760 P300|M300 S2793 P150|M300 S3135 P150|M300 S0 P150|M300 S2637 P300|M300 S2093 P150|M300 S2349 P150|M300 S987 P300";

/// Mario, second theme
pub const MARIO2: &str = "M300 S2093 P83|M300 S2093 P83|M300 S2093 P83|M300 S0 P333|M300 S987 P166|M300 S2793 P166|M300 S0 P166|M300 S2793 P166|M300 S2793 P250|M300 S2637 P250|M300 S2349 P166|M300 S2093 P166|M300 S0 P166|M300 S1318 P166|M300 S0 P166|M300 S1046 P166";

/// Tunes of the preset pool, played by M9000..M9004
pub const PRESET_MACROS: DefaultContent = &[SCOOTER, STARTREK, STARWARS, MARIO, MARIO2];

/// The custom pool ships empty
pub const CUSTOM_MACROS: DefaultContent = &[];
