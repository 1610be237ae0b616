// Customer domain types
//
// A customer is one booking contact, linked to zero or more events through
// its `events` reverse index. Serialized camelCase to match the
// document-store shape.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::contact::ContactInfo;

/// Soft preference flags recorded per customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub catering: bool,
    pub decoration: bool,
    pub music: bool,
    pub photography: bool,
}

/// Customer - one booking contact / client.
///
/// Invariant: every id in `events` references an existing event whose
/// `customer_id` equals this customer's id. The linkage coordinator restores
/// this after every create and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Opaque id assigned by the store on creation; empty on a draft.
    pub id: String,
    /// Composed display name, e.g. "Anna Müller".
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub street_and_number: String,
    pub zip_and_city: String,
    /// Composed display address. Derived once at creation; sync paths never
    /// overwrite a non-blank curated value with a recomposed one.
    pub address: String,
    pub notes: String,
    // Wedding-specific fields
    pub address_bride: String,
    pub address_groom: String,
    pub nationality_bride: String,
    pub nationality_groom: String,
    pub age_bride: String,
    pub age_groom: String,
    /// Reverse index of linked event ids.
    pub events: Vec<String>,
    pub contact_person: String,
    pub budget: String,
    pub guest_count: String,
    pub special_requirements: String,
    pub tags: Vec<String>,
    pub preferences: Preferences,
}

impl Customer {
    /// Build a fresh customer record from a contact bundle. All fields the
    /// bundle does not carry start blank; the reverse index starts empty.
    pub fn from_contact(contact: &ContactInfo) -> Self {
        Customer {
            id: String::new(),
            name: contact.display_name(),
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            company: contact.company.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            mobile: contact.mobile.clone(),
            street_and_number: contact.street_and_number.clone(),
            zip_and_city: contact.zip_and_city.clone(),
            address: contact.display_address(),
            notes: contact.notes.clone(),
            ..Customer::default()
        }
    }
}

/// Merge-patch for a customer. Only fields set to `Some` are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub street_and_number: Option<String>,
    pub zip_and_city: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub address_bride: Option<String>,
    pub address_groom: Option<String>,
    pub nationality_bride: Option<String>,
    pub nationality_groom: Option<String>,
    pub age_bride: Option<String>,
    pub age_groom: Option<String>,
    pub events: Option<Vec<String>>,
    pub contact_person: Option<String>,
    pub budget: Option<String>,
    pub guest_count: Option<String>,
    pub special_requirements: Option<String>,
    pub tags: Option<Vec<String>>,
    pub preferences: Option<Preferences>,
}

impl CustomerPatch {
    /// Apply the patch to a stored customer, overwriting only named fields.
    pub fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(first_name) = self.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            customer.last_name = last_name;
        }
        if let Some(company) = self.company {
            customer.company = company;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(phone) = self.phone {
            customer.phone = phone;
        }
        if let Some(mobile) = self.mobile {
            customer.mobile = mobile;
        }
        if let Some(street_and_number) = self.street_and_number {
            customer.street_and_number = street_and_number;
        }
        if let Some(zip_and_city) = self.zip_and_city {
            customer.zip_and_city = zip_and_city;
        }
        if let Some(address) = self.address {
            customer.address = address;
        }
        if let Some(notes) = self.notes {
            customer.notes = notes;
        }
        if let Some(address_bride) = self.address_bride {
            customer.address_bride = address_bride;
        }
        if let Some(address_groom) = self.address_groom {
            customer.address_groom = address_groom;
        }
        if let Some(nationality_bride) = self.nationality_bride {
            customer.nationality_bride = nationality_bride;
        }
        if let Some(nationality_groom) = self.nationality_groom {
            customer.nationality_groom = nationality_groom;
        }
        if let Some(age_bride) = self.age_bride {
            customer.age_bride = age_bride;
        }
        if let Some(age_groom) = self.age_groom {
            customer.age_groom = age_groom;
        }
        if let Some(events) = self.events {
            customer.events = events;
        }
        if let Some(contact_person) = self.contact_person {
            customer.contact_person = contact_person;
        }
        if let Some(budget) = self.budget {
            customer.budget = budget;
        }
        if let Some(guest_count) = self.guest_count {
            customer.guest_count = guest_count;
        }
        if let Some(special_requirements) = self.special_requirements {
            customer.special_requirements = special_requirements;
        }
        if let Some(tags) = self.tags {
            customer.tags = tags;
        }
        if let Some(preferences) = self.preferences {
            customer.preferences = preferences;
        }
    }

    /// True when the patch touches a field that feeds the composed display
    /// name. Used to decide whether denormalized names on linked events need
    /// re-patching.
    pub fn touches_display_name(&self) -> bool {
        self.name.is_some() || self.first_name.is_some() || self.last_name.is_some()
    }
}
