pub mod about_content;
pub mod blog;
pub mod company_stats;
pub mod company_values;
pub mod health;
pub mod homepage;
pub mod references_content;
pub mod submissions;
pub mod team;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /team                                     public: active team members
/// /about-content                            public: about-page sections
/// /references-content                       public: references-page sections
/// /company-values                           public: ordered values
/// /company-stats                            public: counters singleton
/// /homepage/statistics                      public: ordered statistics
/// /homepage/solutions                       public: ordered solutions
/// /blog                                     public: published posts
/// /blog/{id}                                public: one published post
///
/// /demo-request                             public intake (POST)
/// /contact                                  public intake (POST)
/// /job-application                          public intake (POST)
///
/// /admin/login                              login (public, issues JWT)
///
/// /admin/team                               list, create (admin only)
/// /admin/team/{id}                          update, delete
///
/// /admin/about-content/{section}            upsert (PUT)
/// /admin/references-content/{section}       upsert (PUT)
///
/// /admin/company-values                     create (POST)
/// /admin/company-values/reorder             reorder batch (PUT)
/// /admin/company-values/{id}                update, delete
///
/// /admin/company-stats                      update counters (PUT)
///
/// /admin/homepage/statistics                create (POST)
/// /admin/homepage/statistics/reorder        reorder batch (PUT)
/// /admin/homepage/statistics/{id}           update, delete
/// /admin/homepage/solutions                 create (POST)
/// /admin/homepage/solutions/reorder         reorder batch (PUT)
/// /admin/homepage/solutions/{id}            update, delete
///
/// /admin/blog                               list (drafts too), create
/// /admin/blog/{id}                          update, delete
/// /admin/blog/{id}/publish                  publish (POST)
/// /admin/blog/{id}/unpublish                unpublish (POST)
///
/// /admin/demos                              demo request inbox
/// /admin/demos/{id}                         get, delete
/// /admin/contacts                           contact message inbox
/// /admin/contacts/{id}                      get, delete
/// /admin/job-applications                   job application inbox
/// /admin/job-applications/{id}              get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public content reads.
        .nest("/team", team::public_router())
        .nest("/about-content", about_content::public_router())
        .nest("/references-content", references_content::public_router())
        .nest("/company-values", company_values::public_router())
        .nest("/company-stats", company_stats::public_router())
        .nest("/homepage", homepage::public_router())
        .nest("/blog", blog::public_router())
        // Public submission intakes.
        .merge(submissions::public_router())
        // Admin surface. Every handler below (except login) takes the
        // RequireAdmin extractor.
        .nest("/admin", admin_routes())
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .nest("/team", team::admin_router())
        .nest("/about-content", about_content::admin_router())
        .nest("/references-content", references_content::admin_router())
        .nest("/company-values", company_values::admin_router())
        .nest("/company-stats", company_stats::admin_router())
        .nest("/homepage", homepage::admin_router())
        .nest("/blog", blog::admin_router())
        .merge(submissions::admin_router())
}
