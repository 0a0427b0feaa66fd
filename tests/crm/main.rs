//! CRM module scenarios over the embedded seed data.

mod deals;
