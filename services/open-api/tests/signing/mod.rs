mod fixtures;
mod properties;

use scpsign_core::time::{parse_iso8601, DateTime};
use scpsign_open_api::Credential;

pub const HOST: &str = "example.scp.local";

pub fn fixture_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "secret")
}

pub fn fixture_time() -> DateTime {
    parse_iso8601("20240101T000000Z").expect("fixture time must be valid")
}
