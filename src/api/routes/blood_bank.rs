//! Blood Bank Routes
//!
//! Collection endpoints for donors and blood issues.

use super::crud_routes;
use super::prelude::*;
use crate::model::{BloodIssue, Donor};

crud_routes!(Donor, donors:
    list_donors, create_donor, get_donor, update_donor, delete_donor);

crud_routes!(BloodIssue, blood_issues:
    list_blood_issues, create_blood_issue, get_blood_issue, update_blood_issue,
    delete_blood_issue);
