//! Static copy rendered by the landing, appointment and contact pages.
//!
//! Kept as plain `const` tables so pages stay declarative and tests can
//! assert the published figures without rendering anything.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Highest rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Five star slots, `true` up to the rating. Ratings above five saturate.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = usize::from(self.rating.min(MAX_RATING));
        std::array::from_fn(|slot| slot < filled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Department {
    pub name: &'static str,
    pub extension: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CLINIC_PHONE: &str = "(123) 456-7890";
pub const APPOINTMENTS_EMAIL: &str = "appointments@clinic.com";
pub const SUPPORT_EMAIL: &str = "support@ehealth.com";
pub const STREET_ADDRESS: &str = "123 Medical Center Dr";

// =============================================================
// Landing page
// =============================================================

pub const HERO_HIGHLIGHTS: [Feature; 4] = [
    Feature { icon: "calendar", title: "Quick Booking", description: "Book in under 2 minutes" },
    Feature { icon: "stethoscope", title: "Expert Care", description: "Verified doctors" },
    Feature { icon: "shield", title: "Secure Data", description: "HIPAA compliant" },
    Feature { icon: "clock", title: "Save Time", description: "No waiting rooms" },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "calendar-check",
        title: "Easy Booking",
        description: "Book appointments in seconds with our intuitive interface",
    },
    Feature {
        icon: "shield",
        title: "Secure & Private",
        description: "Your health data is protected with enterprise-grade security",
    },
    Feature { icon: "clock", title: "24/7 Availability", description: "Book appointments anytime, anywhere" },
    Feature { icon: "users", title: "Expert Doctors", description: "Access to certified healthcare professionals" },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "10,000+", label: "Patients Served" },
    Stat { value: "200+", label: "Doctors" },
    Stat { value: "24/7", label: "Support" },
    Stat { value: "98%", label: "Satisfaction Rate" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Patient",
        content: "The easiest appointment system I've ever used! Booked my checkup in minutes.",
        rating: 5,
    },
    Testimonial {
        name: "Dr. Michael Chen",
        role: "Cardiologist",
        content: "Streamlines patient management beautifully. Highly recommended for clinics.",
        rating: 5,
    },
    Testimonial {
        name: "Robert Davis",
        role: "Regular Patient",
        content: "Love the reminders and easy rescheduling. Makes healthcare accessible.",
        rating: 4,
    },
];

pub const CTA_POINTS: [&str; 3] = ["No credit card required", "Cancel anytime", "24/7 support"];

pub const FOOTER_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Home", href: "/" },
    FooterLink { label: "Book Appointment", href: "/Appointment" },
    FooterLink { label: "Login", href: "/Login" },
    FooterLink { label: "Register", href: "/Register" },
];

pub const TRUST_BADGES: &str = "HIPAA compliant • SSL encrypted • GDPR ready • 256-bit security";

// =============================================================
// Appointment page
// =============================================================

pub const BOOKING_REASONS: [Feature; 3] = [
    Feature {
        icon: "clock",
        title: "24/7 Availability",
        description: "Book appointments anytime, day or night",
    },
    Feature {
        icon: "shield",
        title: "Secure & Private",
        description: "Your information is protected and confidential",
    },
    Feature { icon: "stethoscope", title: "Expert Care", description: "Qualified medical professionals" },
];

// =============================================================
// Registration page
// =============================================================

pub const REGISTRATION_BENEFITS: [&str; 4] = [
    "Book appointments 24/7",
    "Access medical records",
    "Secure & HIPAA compliant",
    "Get appointment reminders",
];

pub const PASSWORD_POLICY_HINT: &str = "Must be at least 8 characters with uppercase, lowercase, and number";

// =============================================================
// Contact page
// =============================================================

pub const CONTACT_CARDS: [InfoCard; 4] = [
    InfoCard {
        icon: "phone",
        title: "Phone",
        details: &["(123) 456-7890", "(123) 456-7891 (Emergency)"],
        description: "24/7 Support Available",
    },
    InfoCard {
        icon: "mail",
        title: "Email",
        details: &["info@medicare.com", "support@medicare.com"],
        description: "Response within 24 hours",
    },
    InfoCard {
        icon: "map-pin",
        title: "Address",
        details: &["123 Medical Center Dr", "Healthcare City, HC 12345"],
        description: "Main Headquarters",
    },
    InfoCard {
        icon: "clock",
        title: "Business Hours",
        details: &["Mon-Fri: 8:00 AM - 8:00 PM", "Sat: 9:00 AM - 5:00 PM", "Sun: Emergency Only"],
        description: "Appointments available",
    },
];

pub const DEPARTMENTS: [Department; 6] = [
    Department { name: "Appointments & Scheduling", extension: "ext. 101" },
    Department { name: "Medical Records", extension: "ext. 102" },
    Department { name: "Billing & Insurance", extension: "ext. 103" },
    Department { name: "Technical Support", extension: "ext. 104" },
    Department { name: "Patient Services", extension: "ext. 105" },
    Department { name: "Emergency Contact", extension: "ext. 911" },
];

pub const EMERGENCY_NOTICE: &str =
    "For medical emergencies, please call 911 or visit your nearest emergency room immediately.";

impl Department {
    /// Full dial string shown next to the department name.
    pub fn dial_string(&self) -> String {
        format!("{CLINIC_PHONE} {}", self.extension)
    }
}
