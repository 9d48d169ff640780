//! Rule-table bindings for API request types

use shared::{RegisterCaptainRequest, RegisterUserRequest};

use super::extractors::RuleSet;
use super::rules::{Rule, CAPTAIN_REGISTRATION_RULES, USER_REGISTRATION_RULES};

impl RuleSet for RegisterCaptainRequest {
    const RULES: &'static [Rule] = CAPTAIN_REGISTRATION_RULES;
}

impl RuleSet for RegisterUserRequest {
    const RULES: &'static [Rule] = USER_REGISTRATION_RULES;
}
