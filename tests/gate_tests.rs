use folio_portal::config::Env;
use folio_portal::gate::{self, GateDecision, LOGIN_PATH, SESSION_COOKIE};

const SECRET: &str = "gate-test-secret";

#[test]
fn non_admin_paths_pass_unconditionally() {
    for path in ["/", "/health", "/projects", "/projects/rebrand", "/theme.css"] {
        assert_eq!(
            gate::evaluate(path, Some(SECRET), None, None),
            GateDecision::Pass,
            "{path} should pass without credentials"
        );
    }
    // Even with no secret configured at all.
    assert_eq!(
        gate::evaluate("/projects", None, None, None),
        GateDecision::Pass
    );
}

#[test]
fn login_path_passes_regardless_of_cookie_state() {
    assert_eq!(
        gate::evaluate(LOGIN_PATH, Some(SECRET), None, None),
        GateDecision::Pass
    );
    assert_eq!(
        gate::evaluate(LOGIN_PATH, Some(SECRET), Some("wrong"), None),
        GateDecision::Pass
    );
    assert_eq!(
        gate::evaluate(LOGIN_PATH, None, None, None),
        GateDecision::Pass
    );
}

#[test]
fn missing_secret_fails_closed() {
    assert_eq!(
        gate::evaluate("/admin", None, None, None),
        GateDecision::RedirectToLogin
    );
    // A cookie cannot help when nothing is configured to compare against.
    assert_eq!(
        gate::evaluate("/admin/projects", None, Some("anything"), None),
        GateDecision::RedirectToLogin
    );
    // An empty configured secret counts as unconfigured.
    assert_eq!(
        gate::evaluate("/admin/projects", Some(""), Some(""), None),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn cookie_match_passes_and_mismatch_redirects() {
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), Some(SECRET), None),
        GateDecision::Pass
    );
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), Some("stale-secret"), None),
        GateDecision::RedirectToLogin
    );
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), None, None),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn query_secret_passes_and_plants_cookie() {
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), None, Some(SECRET)),
        GateDecision::PassAndSetCookie
    );
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), None, Some("wrong")),
        GateDecision::RedirectToLogin
    );
    // A valid cookie wins before the query parameter is consulted; no
    // redundant Set-Cookie on every request.
    assert_eq!(
        gate::evaluate("/admin/projects", Some(SECRET), Some(SECRET), Some(SECRET)),
        GateDecision::Pass
    );
}

#[test]
fn admin_prefix_does_not_match_sibling_paths() {
    assert_eq!(
        gate::evaluate("/administrate", Some(SECRET), None, None),
        GateDecision::Pass
    );
    assert_eq!(
        gate::evaluate("/admin-panel", Some(SECRET), None, None),
        GateDecision::Pass
    );
    // The bare prefix itself is gated.
    assert_eq!(
        gate::evaluate("/admin", Some(SECRET), None, None),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn session_cookie_is_hardened() {
    let cookie = gate::session_cookie(SECRET, &Env::Local);
    assert_eq!(cookie.name(), SESSION_COOKIE);
    assert_eq!(cookie.value(), SECRET);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    // Secure only outside local development.
    assert_eq!(cookie.secure(), Some(false));

    let prod_cookie = gate::session_cookie(SECRET, &Env::Production);
    assert_eq!(prod_cookie.secure(), Some(true));
}
