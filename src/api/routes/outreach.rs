//! Outreach Routes
//!
//! Collection endpoints for RFID tags and marketing field visits.

use super::crud_routes;
use super::prelude::*;
use crate::model::{MarketingVisit, RfidTag};

crud_routes!(RfidTag, rfid_tags:
    list_rfid_tags, create_rfid_tag, get_rfid_tag, update_rfid_tag, delete_rfid_tag);

crud_routes!(MarketingVisit, marketing_visits:
    list_marketing_visits, create_marketing_visit, get_marketing_visit,
    update_marketing_visit, delete_marketing_visit);
