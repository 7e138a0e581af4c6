//! Static site content: the built-in product list, contact channels and
//! office locations.

use crate::model::{Product, Weight, WeightUnit};

pub const COMPANY_NAME: &str = "Rock International Bullion";

pub const INQUIRIES_EMAIL: &str = "inquiries@rockinternationalbullion.com";
pub const PRIVACY_EMAIL: &str = "privacy@rockinternationalbullion.com";
pub const LEGAL_EMAIL: &str = "legal@rockinternationalbullion.com";
pub const COMPLIANCE_EMAIL: &str = "compliance@rockinternationalbullion.com";

/// Text prefilled into a WhatsApp conversation opened from the site.
pub const WHATSAPP_GREETING: &str = "Hello, I am interested in your gold acquisition services.";

/// A WhatsApp contact for one office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhatsApp {
    pub office: &'static str,
    /// Number as shown to visitors.
    pub display: &'static str,
    /// Digits only, as `wa.me` expects.
    pub digits: &'static str,
}

impl WhatsApp {
    /// Bare chat link.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("https://wa.me/{}", self.digits)
    }

    /// Chat link with [`WHATSAPP_GREETING`] prefilled.
    #[must_use]
    pub fn greeting_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.digits,
            urlencoding::encode(WHATSAPP_GREETING)
        )
    }
}

pub const WHATSAPP_NEW_YORK: WhatsApp = WhatsApp {
    office: "New York",
    display: "+1 (646) 391-5932",
    digits: "16463915932",
};

pub const WHATSAPP_LONDON: WhatsApp = WhatsApp {
    office: "London",
    display: "+44 7424 127586",
    digits: "447424127586",
};

/// Office city and country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub country: &'static str,
}

pub const OFFICES: [Office; 2] = [
    Office {
        city: "New York",
        country: "United States",
    },
    Office {
        city: "London",
        country: "United Kingdom",
    },
];

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    (magnitude, unit): (&str, WeightUnit),
    purity: &str,
    certification: &str,
    description: &str,
    image_url: &str,
    category: &str,
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        weight: Weight {
            magnitude: magnitude.to_owned(),
            unit,
        },
        purity: purity.to_owned(),
        certification: certification.to_owned(),
        description: description.to_owned(),
        image_url: image_url.to_owned(),
        category: Some(category.to_owned()),
    }
}

/// The four bars the site lists when it is not backed by the remote catalog.
#[must_use]
pub fn static_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "1 Gram Gold Bar",
            ("1", WeightUnit::Gram),
            "999.9",
            "LBMA Certified",
            "Perfect entry point for new investors. LBMA-certified 1 gram fine gold bar with assay certificate.",
            "https://images.unsplash.com/photo-1610375461246-83df859d849d?w=400&q=80",
            "small",
        ),
        product(
            "2",
            "100 Gram Gold Bar",
            ("100", WeightUnit::Gram),
            "999.9",
            "LBMA Certified",
            "Popular choice for serious investors. Cast or minted 100g bar with full certification.",
            "https://images.unsplash.com/photo-1624365168968-f283d506c6b6?w=400&q=80",
            "medium",
        ),
        product(
            "3",
            "1 Kilogram Gold Bar",
            ("1", WeightUnit::Kilogram),
            "999.9",
            "LBMA Certified",
            "Premium investment bar for substantial holdings. Cast 1kg bar from accredited refinery.",
            "https://images.unsplash.com/photo-1589787168422-ac843ebdb3ba?w=400&q=80",
            "large",
        ),
        product(
            "4",
            "400 oz Good Delivery Bar",
            ("400", WeightUnit::TroyOunce),
            "995.0+",
            "LBMA Good Delivery",
            "Institutional-grade London Good Delivery bar. The gold standard for central banks and major investors.",
            "https://images.unsplash.com/photo-1611598412658-3a14ff7ce4bc?w=400&q=80",
            "institutional",
        ),
    ]
}
