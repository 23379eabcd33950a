//! Staff Routes
//!
//! Collection endpoints for the doctor roster and console user accounts.
//!
//! - GET/POST /api/v1/admin/doctors, GET/PUT/DELETE /api/v1/admin/doctors/:id
//! - GET/POST /api/v1/admin/users, GET/PUT/DELETE /api/v1/admin/users/:id
//!
//! The doctor list is also mounted read-only on the public site as the
//! doctor directory.

use super::crud_routes;
use super::prelude::*;
use crate::model::{Doctor, StaffUser};

crud_routes!(Doctor, doctors:
    list_doctors, create_doctor, get_doctor, update_doctor, delete_doctor);

crud_routes!(StaffUser, users:
    list_users, create_user, get_user, update_user, delete_user);
