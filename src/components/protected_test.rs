use super::*;

use crate::net::types::UserProfile;
use crate::state::session::AuthStatus;

fn auth(status: AuthStatus, loading: bool) -> SessionSnapshot {
    SessionSnapshot { status, loading }
}

fn profile(user: Option<UserProfile>, loading: bool) -> ProfileSnapshot {
    let has_access = user.as_ref().map(|u| u.has_access);
    ProfileSnapshot { user, has_access, loading }
}

fn some_user() -> Option<UserProfile> {
    Some(UserProfile {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        has_access: true,
    })
}

#[test]
fn loading_while_session_resolves() {
    let outcome = guard_outcome(&auth(AuthStatus::Unknown, true), &profile(None, false));
    assert_eq!(outcome, GuardOutcome::Loading);
}

#[test]
fn loading_while_profile_resolves() {
    let outcome = guard_outcome(&auth(AuthStatus::Authenticated, false), &profile(None, true));
    assert_eq!(outcome, GuardOutcome::Loading);
}

#[test]
fn unauthenticated_redirects_once_loaded() {
    let outcome = guard_outcome(&auth(AuthStatus::Unauthenticated, false), &profile(None, false));
    assert_eq!(outcome, GuardOutcome::RedirectLogin);
}

#[test]
fn authenticated_without_profile_renders_nothing() {
    let outcome = guard_outcome(&auth(AuthStatus::Authenticated, false), &profile(None, false));
    assert_eq!(outcome, GuardOutcome::Hidden);
}

#[test]
fn authenticated_with_profile_shows_content() {
    let outcome =
        guard_outcome(&auth(AuthStatus::Authenticated, false), &profile(some_user(), false));
    assert_eq!(outcome, GuardOutcome::Show);
}
