//! Shared test data constants to avoid magic strings across integration tests

pub const TEST_PASSWORD: &str = "password";
pub const TEST_USERNAME: &str = "Username";

/// Ingredient ids from the service's published catalog.
pub const VALID_INGREDIENTS: [&str; 3] = [
    "61c0c5a71d1f82001bdaaa6d",
    "61c0c5a71d1f82001bdaaa72",
    "61c0c5a71d1f82001bdaaa6f",
];

/// Ids the service has never issued (trigger a 500).
pub const INVALID_INGREDIENTS: [&str; 2] = ["invalidIngredient1", "invalidIngredient2"];

pub const REQUIRED_FIELDS_MESSAGE: &str = "Email, password and name are required fields";
pub const USER_EXISTS_MESSAGE: &str = "User already exists";
pub const UNAUTHORISED_MESSAGE: &str = "You should be authorised";
