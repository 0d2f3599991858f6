pub const APPLICATION_JSON: &str = "application/json";

pub const CONNECTION_POOL_ERROR: &str = "couldn't get DB connection from pool";

pub const RECORD_NOT_FOUND: &str =
    "This record does not exist in our database. Please try again.";
