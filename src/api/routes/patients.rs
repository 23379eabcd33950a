//! Patient Routes
//!
//! Collection endpoints for patients, smart cards, and document metadata.

use super::crud_routes;
use super::prelude::*;
use crate::model::{Document, Patient, SmartCard};

crud_routes!(Patient, patients:
    list_patients, create_patient, get_patient, update_patient, delete_patient);

crud_routes!(SmartCard, smart_cards:
    list_smart_cards, create_smart_card, get_smart_card, update_smart_card, delete_smart_card);

crud_routes!(Document, documents:
    list_documents, create_document, get_document, update_document, delete_document);
