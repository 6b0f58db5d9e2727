//! Route table for the `/api` scope.

use actix_web::web;

use super::handlers::{health, patients, staff, stats, tests};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Literal paths are registered ahead of their `{id}` siblings so
            // e.g. POST /patients/register never hits the id resource.
            .service(patients::list)
            .service(patients::register)
            .service(patients::get)
            .service(patients::update)
            .service(patients::delete)
            .service(tests::list)
            .service(tests::schedule)
            .service(tests::get)
            .service(tests::update)
            .service(tests::delete_permanent)
            .service(tests::cancel)
            .service(staff::doctors)
            .service(staff::reviewers)
            .service(stats::total_patients)
            .service(stats::pending_tests)
            .service(stats::total_staff)
            .service(stats::test_breakdown)
            .service(stats::recent_activity)
            .service(health::health),
    );
}
