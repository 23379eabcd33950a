//! Pharmacy Routes
//!
//! Collection endpoints for the medicine inventory and counter bills.

use super::crud_routes;
use super::prelude::*;
use crate::model::{Medicine, MedicineBill};

crud_routes!(Medicine, medicines:
    list_medicines, create_medicine, get_medicine, update_medicine, delete_medicine);

crud_routes!(MedicineBill, medicine_bills:
    list_medicine_bills, create_medicine_bill, get_medicine_bill, update_medicine_bill,
    delete_medicine_bill);
