/// Todo primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Owner identifier carried on each todo. Not checked against any user table.
pub type UserId = i64;
