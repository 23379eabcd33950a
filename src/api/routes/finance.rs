//! Finance Routes
//!
//! Collection endpoints for transactions, invoices, and the hospital
//! charge sheet. Figures are whatever the forms submitted; there is no
//! ledger behind these lists.

use super::crud_routes;
use super::prelude::*;
use crate::model::{HospitalCharge, Invoice, Transaction};

crud_routes!(Transaction, transactions:
    list_transactions, create_transaction, get_transaction, update_transaction,
    delete_transaction);

crud_routes!(Invoice, invoices:
    list_invoices, create_invoice, get_invoice, update_invoice, delete_invoice);

crud_routes!(HospitalCharge, charges:
    list_charges, create_charge, get_charge, update_charge, delete_charge);
