/// Points threshold for the top tier (inclusive)
pub const GOLD_THRESHOLD: f64 = 5000.0;

/// Points threshold for the mid tier (inclusive)
/// Balances below this fall into the base tier
pub const SILVER_THRESHOLD: f64 = 2500.0;

/// Points balance assigned to newly created records
pub const DEFAULT_POINTS: f64 = 2500.0;

/// Username of the record seeded once at startup
pub const SEED_USERNAME: &str = "Ahmet Özdemir";

/// Message returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to the Zuzzuu API";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message returned when a lookup matches no record
pub const ERR_USER_NOT_FOUND: &str = "User not found";
