//! Sheet names, header rows and column positions.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Stylists,
    BraidingSessions,
    Payments,
    Locations,
}

impl Sheet {
    pub const ALL: [Sheet; 4] = [
        Sheet::Stylists,
        Sheet::BraidingSessions,
        Sheet::Payments,
        Sheet::Locations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sheet::Stylists => "Stylists",
            Sheet::BraidingSessions => "BraidingSessions",
            Sheet::Payments => "Payments",
            Sheet::Locations => "Locations",
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Sheet::Stylists => &[
                "Registration Date", "Name", "Phone", "Location", "Experience",
                "Specialization", "Rating", "Status", "Stylist ID",
            ],
            Sheet::BraidingSessions => &[
                "Session Date", "Stylist ID", "Stylist Name", "Client Name",
                "Service Type", "Amount", "Duration", "Location", "Rating", "Status",
                "Session ID",
            ],
            Sheet::Payments => &[
                "Payment Date", "Stylist ID", "Client Name", "Amount",
                "Status", "Payment Method", "Location", "Session ID",
            ],
            Sheet::Locations => &[
                "Location Name", "Stylists Count", "Braiding Done", "Avg Rating",
                "Total Revenue", "Payment Received", "Pending Payment",
            ],
        }
    }
}

impl Display for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub mod stylist {
    pub const REGISTRATION_DATE: usize = 0;
    pub const NAME: usize = 1;
    pub const PHONE: usize = 2;
    pub const LOCATION: usize = 3;
    pub const EXPERIENCE: usize = 4;
    pub const SPECIALIZATION: usize = 5;
    pub const RATING: usize = 6;
    pub const STATUS: usize = 7;
    pub const STYLIST_ID: usize = 8;
}

pub mod session {
    pub const SESSION_DATE: usize = 0;
    pub const STYLIST_ID: usize = 1;
    pub const STYLIST_NAME: usize = 2;
    pub const CLIENT_NAME: usize = 3;
    pub const SERVICE_TYPE: usize = 4;
    pub const AMOUNT: usize = 5;
    pub const DURATION: usize = 6;
    pub const LOCATION: usize = 7;
    pub const RATING: usize = 8;
    pub const STATUS: usize = 9;
    pub const SESSION_ID: usize = 10;
}

pub mod payment {
    pub const PAYMENT_DATE: usize = 0;
    pub const STYLIST_ID: usize = 1;
    pub const CLIENT_NAME: usize = 2;
    pub const AMOUNT: usize = 3;
    pub const STATUS: usize = 4;
    pub const METHOD: usize = 5;
    pub const LOCATION: usize = 6;
    pub const SESSION_ID: usize = 7;
}

pub mod location {
    pub const NAME: usize = 0;
    pub const STYLISTS: usize = 1;
    pub const BRAIDING: usize = 2;
    pub const RATING: usize = 3;
    pub const TOTAL: usize = 4;
    pub const RECEIVED: usize = 5;
    pub const PENDING: usize = 6;
}
