/// Router Module Index
///
/// Organizes the application's routing logic into access-segregated modules.
/// The split mirrors the two audiences of the site: anonymous visitors and
/// the single authenticated site owner.

/// Routes accessible to all visitors (anonymous, read-only plus the contact
/// form). No credential ever influences these handlers.
pub mod public;

/// Routes nested under `/admin`, protected by the shared-secret gate applied
/// in `create_router`. Only the login endpoint is reachable without the
/// session cookie.
pub mod admin;
