use crate::extractors::session::Identity;

/// True iff there is an authenticated identity whose role name is exactly `role_name`.
pub fn has_role(identity: Option<&Identity>, role_name: &str) -> bool {
    identity
        .and_then(|i| i.role.as_deref())
        .is_some_and(|role| role == role_name)
}
