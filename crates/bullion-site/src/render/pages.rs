//! Page bodies. Each function returns the content that goes inside the
//! shell's `<main>`.

use bullion_core::catalog::Catalog;
use bullion_core::content::{
    INQUIRIES_EMAIL, OFFICES, WHATSAPP_LONDON, WHATSAPP_NEW_YORK, WhatsApp,
};
use bullion_core::form::FormState;
use bullion_core::model::{CONSULTATION_METHODS, LeadField, Product, SpotPrice, SubmissionStatus};

use super::escape_html;

fn header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="page-header"><h1>{title}</h1><p>{subtitle}</p><div class="rule"></div></div>"#
    )
}

fn ticks(items: &[&str]) -> String {
    let mut html = String::from(r#"<ul class="ticks">"#);
    for item in items {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

// ── Home ─────────────────────────────────────────────────────────────

/// Home page. Features the first products of the catalog and shows the
/// spot price only when one was fetched.
#[must_use]
pub fn home(catalog: &Catalog) -> String {
    let ny = WHATSAPP_NEW_YORK.greeting_url();

    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div data-testid="home-page">"#);
    html.push_str(&format!(
        r#"<section class="hero"><div class="hero-bg"><img src="https://images.unsplash.com/photo-1643324897407-54f8ae049132?w=1920&q=80" alt="Gold texture"/></div>
<div class="hero-inner">
<h1><span class="white">Exclusive Gold Acquisition</span><br/><span class="gold-text">for Discerning Investors</span></h1>
<p>Private, Secure, Global. Premium gold procurement services for high-net-worth individuals.</p>
<div class="hero-actions"><a href="{ny}" target="_blank" rel="noopener noreferrer" class="btn btn-gold" data-testid="hero-cta-primary">Contact Us Today &rsaquo;</a><a href="/products" class="btn btn-outline" data-testid="hero-cta-secondary">View Products</a></div>
</div></section>
"#
    ));

    html.push_str(HOME_FEATURES);

    html.push_str(r#"<section class="section"><div class="container"><h2 class="section-title">Featured Gold Bars</h2><p class="muted" style="text-align:center">Owning physical gold is not just a purchase&mdash;it&#39;s a strategy.</p><div class="rule"></div><div style="height:48px"></div>"#);
    if let Some(spot) = &catalog.spot_price {
        html.push_str(&spot_price(spot));
    }
    let featured = catalog.featured();
    if featured.is_empty() {
        html.push_str(EMPTY_CATALOG);
    } else {
        html.push_str(r#"<div class="grid grid-4">"#);
        for product in featured {
            html.push_str(&product_tile(product, &ny));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></section>\n");

    html.push_str(&format!(
        r#"<section class="section"><div class="container"><div class="cta-band" style="margin-top:0">
<h3>Schedule a Confidential Consultation</h3>
<p>Our team of experts is ready to assist you with your gold acquisition needs. All inquiries are handled with the utmost discretion.</p>
<a href="{ny}" target="_blank" rel="noopener noreferrer" class="btn btn-gold" data-testid="cta-consultation">Request Private Consultation</a>
</div></div></section>
"#
    ));
    html.push_str("</div>");
    html
}

/// The live gold quote.
fn spot_price(spot: &SpotPrice) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(r#"<div class="spot-price" data-testid="spot-price"><div class="muted">Gold Spot Price</div><div class="price">"#);
    html.push_str(&escape_html(&spot.gold_display()));
    html.push_str(r#"<span class="muted" style="font-size:16px"> / troy oz</span></div><div class="meta">"#);
    let mut meta = Vec::new();
    if let Some(currency) = &spot.currency {
        meta.push(escape_html(currency));
    }
    if let Some(silver) = spot.silver_price_usd {
        meta.push(format!(
            "Silver {}",
            escape_html(&bullion_core::model::format_usd(silver))
        ));
    }
    if let Some(updated) = &spot.last_updated {
        meta.push(format!("Updated {}", escape_html(updated)));
    }
    html.push_str(&meta.join(" &middot; "));
    html.push_str("</div></div>");
    html
}

fn product_tile(product: &Product, request_url: &str) -> String {
    format!(
        r#"<div class="product-tile" data-testid="featured-product"><img src="{img}" alt="{name}"/><div class="body"><h3>{name}</h3><p class="gold" style="font-size:14px">Purity: {purity}</p><p style="font-size:12px;color:var(--dim)">{cert}</p><a href="{request_url}" target="_blank" rel="noopener noreferrer" class="btn btn-outline" style="display:block;margin-top:16px;padding:8px">Request Price</a></div></div>"#,
        img = escape_html(&product.image_url),
        name = escape_html(&product.name),
        purity = escape_html(&product.purity),
        cert = escape_html(&product.certification),
    )
}

const HOME_FEATURES: &str = r#"<section class="section alt"><div class="container"><h2 class="section-title">Why Choose Us</h2><div class="rule"></div><div style="height:64px"></div>
<div class="grid grid-3">
<div class="card dark"><div class="feature-icon">&#128274;</div><h3>Discreet Transactions</h3><p>Complete confidentiality for all purchases and transfers.</p></div>
<div class="card dark"><div class="feature-icon">&#128737;</div><h3>LBMA-Certified Gold</h3><p>Only the highest quality gold from accredited refineries.</p></div>
<div class="card dark"><div class="feature-icon">&#127760;</div><h3>Insured Global Delivery</h3><p>Secure worldwide shipping with full insurance coverage.</p></div>
</div></div></section>
"#;

const EMPTY_CATALOG: &str = r#"<p class="empty" data-testid="catalog-empty">Our current inventory is available on request. Contact us for today&#39;s availability.</p>"#;

// ── Products ─────────────────────────────────────────────────────────

/// Products page: every product, in the order received.
#[must_use]
pub fn products(catalog: &Catalog) -> String {
    let ny = WHATSAPP_NEW_YORK.greeting_url();
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="page" data-testid="products-page"><div class="container">"#);
    html.push_str(&header(
        "Our Gold Products",
        "Choose from 1g to 400oz gold bars, sourced only from accredited refineries.",
    ));
    if catalog.products.is_empty() {
        html.push_str(EMPTY_CATALOG);
    } else {
        html.push_str(r#"<div class="grid grid-2">"#);
        for (idx, product) in catalog.products.iter().enumerate() {
            html.push_str(&product_card(idx, product, &ny));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></div>");
    html
}

fn product_card(idx: usize, product: &Product, request_url: &str) -> String {
    format!(
        r#"<div class="product-card" data-testid="product-card-{idx}"><div class="image"><img src="{img}" alt="{name}"/></div><div class="body"><div><h3>{name}</h3><div class="specs"><div class="spec"><span class="label">Weight</span><span class="value">{weight}</span></div><div class="spec"><span class="label">Purity</span><span class="value">{purity}</span></div></div><span class="badge">{cert}</span><p class="muted" style="font-size:14px;margin-bottom:20px">{desc}</p></div><a href="{request_url}" target="_blank" rel="noopener noreferrer" class="btn btn-gold">Request Today&#39;s Price</a></div></div>"#,
        img = escape_html(&product.image_url),
        name = escape_html(&product.name),
        weight = escape_html(&product.weight.to_string()),
        purity = escape_html(&product.purity),
        cert = escape_html(&product.certification),
        desc = escape_html(&product.description),
    )
}

// ── Services ─────────────────────────────────────────────────────────

#[must_use]
pub fn services() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="page" data-testid="services-page"><div class="container">"#);
    html.push_str(&header(
        "Our Services",
        "Comprehensive gold acquisition and management services for private clients.",
    ));
    html.push_str(SERVICES_BODY);
    html.push_str("</div></div>");
    html
}

const SERVICES_BODY: &str = r#"<div class="grid grid-2">
<div class="card"><div class="feature-icon">&#127941;</div><h3>Custom Gold Acquisition</h3><p>Tailored procurement solutions for specific gold requirements. We source bars and coins from the world&#39;s most trusted refineries to meet your exact specifications.</p></div>
<div class="card"><div class="feature-icon">&#128202;</div><h3>Investor Bulk Purchase Programs</h3><p>Exclusive programs for high-volume purchases with preferential pricing. Ideal for institutional investors and family offices.</p></div>
<div class="card"><div class="feature-icon">&#128272;</div><h3>Secure Vaulting Partners</h3><p>Access to world-class vaulting facilities through our trusted partners. Fully insured storage in multiple jurisdictions.</p></div>
<div class="card"><div class="feature-icon">&#127757;</div><h3>International Insured Delivery</h3><p>Secure, discreet shipping worldwide with full insurance coverage. White-glove delivery service for substantial acquisitions.</p></div>
</div>
<div class="cta-band"><h3>Need a Custom Solution?</h3><p>Our team specializes in creating bespoke acquisition strategies for complex requirements.</p><a href="/contact" class="btn btn-gold">Discuss Your Requirements</a></div>"#;

// ── Clients ──────────────────────────────────────────────────────────

struct Privilege {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    features: [&'static str; 4],
}

const PRIVILEGES: [Privilege; 4] = [
    Privilege {
        icon: "&#128274;",
        title: "Absolute Discretion",
        desc: "Every interaction, transaction, and communication is handled with the utmost confidentiality. Your identity and holdings remain completely private.",
        features: [
            "Anonymous acquisition options",
            "Encrypted communications",
            "Non-disclosure agreements",
            "Private viewing appointments",
        ],
    },
    Privilege {
        icon: "&#128737;",
        title: "Priority Access",
        desc: "As a privileged client, you receive first access to rare and limited gold products before they reach the general market.",
        features: [
            "Early access to new inventory",
            "Reserved allocation rights",
            "Exclusive product offerings",
            "Priority order fulfillment",
        ],
    },
    Privilege {
        icon: "&#127760;",
        title: "White-Glove Delivery",
        desc: "Our premium logistics network ensures your gold arrives safely, discreetly, and on your schedule&mdash;anywhere in the world.",
        features: [
            "Personal courier service",
            "Armored transport options",
            "Custom delivery scheduling",
            "Real-time secure tracking",
        ],
    },
    Privilege {
        icon: "&#128222;",
        title: "Dedicated Advisor",
        desc: "Your personal relationship manager is available around the clock to address your needs and provide expert guidance.",
        features: [
            "24/7 direct phone line",
            "Personalized market insights",
            "Portfolio review sessions",
            "Succession planning support",
        ],
    },
];

struct Tier {
    name: &'static str,
    min_investment: &'static str,
    benefits: &'static [&'static str],
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Private",
        min_investment: "$100,000+",
        benefits: &[
            "Dedicated account manager",
            "Competitive pricing",
            "Insured delivery",
            "Quarterly market reports",
        ],
    },
    Tier {
        name: "Elite",
        min_investment: "$500,000+",
        benefits: &[
            "Senior advisor assignment",
            "Priority pricing",
            "White-glove delivery",
            "Monthly strategy calls",
            "Exclusive event invitations",
        ],
    },
    Tier {
        name: "Institutional",
        min_investment: "$2,000,000+",
        benefits: &[
            "Direct principal access",
            "Institutional pricing",
            "Custom logistics solutions",
            "Dedicated secure storage",
            "Family office integration",
            "Legacy planning services",
        ],
    },
];

/// Index of the tier flagged as most popular.
const POPULAR_TIER: usize = 1;

#[must_use]
pub fn clients() -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="page" data-testid="clients-page"><div class="container">"#);
    html.push_str(&header(
        "Private Client Privileges",
        "Experience the pinnacle of discreet gold acquisition services. Our privileged clients enjoy exclusive benefits designed for those who demand absolute privacy and exceptional service.",
    ));

    html.push_str(r#"<div class="grid grid-2" style="margin-bottom:96px">"#);
    for p in &PRIVILEGES {
        html.push_str(&format!(
            r#"<div class="card"><div class="feature-icon">{}</div><h3>{}</h3><p style="margin-bottom:24px">{}</p>{}</div>"#,
            p.icon,
            p.title,
            p.desc,
            ticks(&p.features)
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<h2 class="section-title">Client Tiers</h2><p class="muted" style="text-align:center;max-width:672px;margin:0 auto 48px">Our tiered service model ensures that every client receives attention and benefits commensurate with their investment level.</p><div class="grid grid-3" style="margin-bottom:96px">"#);
    for (idx, tier) in TIERS.iter().enumerate() {
        let popular = idx == POPULAR_TIER;
        html.push_str(if popular {
            r#"<div class="card dark tier popular"><div class="tag">MOST POPULAR</div>"#
        } else {
            r#"<div class="card dark tier">"#
        });
        html.push_str(&format!(
            r#"<h3>{}</h3><p class="min">{}</p>{}</div>"#,
            tier.name,
            tier.min_investment,
            ticks(tier.benefits)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class="cta-band"><div class="feature-icon">&#128274;</div><h3>Our Confidentiality Promise</h3><p>At Rock International Bullion, discretion is not merely a service feature&mdash;it is the foundation of everything we do. We understand that our clients value their privacy above all else. That is why we have implemented rigorous protocols to ensure that your identity, transactions, and holdings remain absolutely confidential. No information is ever shared with third parties without your explicit written consent.</p><a href="{}" target="_blank" rel="noopener noreferrer" class="btn btn-gold">Apply for Private Membership</a></div>"#,
        WHATSAPP_NEW_YORK.greeting_url()
    ));
    html.push_str("</div></div>");
    html
}

// ── About ────────────────────────────────────────────────────────────

#[must_use]
pub fn about() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="page" data-testid="about-page"><div class="container">"#);
    html.push_str(&header(
        "About Us",
        "Meet the leadership behind Rock International Bullion",
    ));
    html.push_str(ABOUT_BODY);
    html.push_str("</div></div>");
    html
}

const ABOUT_BODY: &str = r#"<div class="grid grid-2" style="align-items:center;margin-bottom:96px">
<div class="card" style="text-align:center;padding:96px 32px"><div class="avatar">HF</div><h3>Hannah A. Fry</h3><p class="gold">Founder &amp; Principal</p></div>
<div>
<h2 class="section-title" style="text-align:left">Meet Hannah A. Fry</h2>
<p style="margin-bottom:16px">Hannah A. Fry brings over a decade of experience in private wealth management and precious metals advisory to Rock International Bullion. Her expertise spans institutional investment strategies, portfolio diversification, and discreet asset protection for ultra-high-net-worth families.</p>
<p style="margin-bottom:16px">With a background in international finance and a deep understanding of global bullion markets, Hannah specializes in creating bespoke acquisition strategies tailored to each client&#39;s unique financial objectives and privacy requirements.</p>
<p style="margin-bottom:32px">Operating from New York and London, she has established Rock International Bullion as a trusted name among high-net-worth individuals seeking discretion and expertise. Her commitment to excellence has made her an invaluable partner for clients seeking sophisticated gold investment solutions.</p>
<div class="grid grid-2" style="gap:24px"><div class="stat"><div class="n">10+</div><div class="muted">Years in Private Wealth</div></div><div class="stat"><div class="n">2</div><div class="muted">Global Offices</div></div></div>
</div></div>
<div class="card" style="padding:40px"><h3 style="text-align:center;margin-bottom:24px">Our Commitment</h3><div class="grid grid-3" style="text-align:center">
<div><div class="feature-icon">&#128737;</div><h4 class="white">Confidentiality</h4><p>Your privacy is paramount. All transactions are handled with complete discretion.</p></div>
<div><div class="feature-icon">&#127760;</div><h4 class="white">Global Reach</h4><p>Serving clients worldwide from our New York and London operations.</p></div>
<div><div class="feature-icon">&#128274;</div><h4 class="white">Security</h4><p>Industry-leading security protocols for every transaction and delivery.</p></div>
</div></div>"#;

// ── Contact ──────────────────────────────────────────────────────────

/// Contact page with the lead form rendered from `state`.
#[must_use]
pub fn contact(state: &FormState) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div class="page" data-testid="contact-page"><div class="container">"#);
    html.push_str(&header(
        "Contact Us",
        "Request a private consultation or inquire about today&#39;s gold prices.",
    ));
    html.push_str(r#"<div class="grid grid-2" style="gap:48px"><div>"#);
    html.push_str(&lead_form(state));
    html.push_str("</div>");
    html.push_str(&contact_aside());
    html.push_str("</div></div></div>");
    html
}

/// The form itself. Values are always escaped since they echo visitor input.
#[must_use]
pub fn lead_form(state: &FormState) -> String {
    let draft = &state.draft;
    let value = |field: LeadField| escape_html(draft.get(field));
    let required = |field: LeadField| if field.is_required() { " required" } else { "" };

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<form method="post" action="/contact" data-testid="contact-form">"#);

    html.push_str(&format!(
        r#"<div class="field"><label for="full_name">Full Name *</label><input type="text" id="full_name" name="{name}" data-testid="input-name" value="{v}" placeholder="Your full name"{r}/></div>"#,
        name = LeadField::FullName.name(),
        v = value(LeadField::FullName),
        r = required(LeadField::FullName),
    ));
    html.push_str(&format!(
        r#"<div class="grid grid-2" style="gap:24px"><div class="field"><label for="email">Email *</label><input type="email" id="email" name="{name}" data-testid="input-email" value="{v}" placeholder="your@email.com"{r}/></div>"#,
        name = LeadField::Email.name(),
        v = value(LeadField::Email),
        r = required(LeadField::Email),
    ));
    html.push_str(&format!(
        r#"<div class="field"><label for="phone">Phone</label><input type="tel" id="phone" name="{name}" data-testid="input-phone" value="{v}" placeholder="+1 234 567 8900"/></div></div>"#,
        name = LeadField::Phone.name(),
        v = value(LeadField::Phone),
    ));
    html.push_str(&format!(
        r#"<div class="grid grid-2" style="gap:24px"><div class="field"><label for="country">Country</label><input type="text" id="country" name="{name}" data-testid="input-country" value="{v}" placeholder="Your country"/></div>"#,
        name = LeadField::Country.name(),
        v = value(LeadField::Country),
    ));

    html.push_str(&format!(
        r#"<div class="field"><label for="consultation_method">Preferred Consultation Method</label><select id="consultation_method" name="{}" data-testid="input-consultation"><option value="">Select method</option>"#,
        LeadField::ConsultationMethod.name()
    ));
    for (option, label) in CONSULTATION_METHODS {
        let selected = if draft.consultation_method == option {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{option}"{selected}>{label}</option>"#
        ));
    }
    html.push_str("</select></div></div>");

    html.push_str(&format!(
        r#"<div class="field"><label for="message">Message</label><textarea id="message" name="{}" rows="4" data-testid="input-message" placeholder="Tell us about your requirements...">{}</textarea></div>"#,
        LeadField::Message.name(),
        value(LeadField::Message),
    ));

    html.push_str(&status_banner(&state.status));

    if state.loading {
        html.push_str(r#"<button type="submit" class="btn btn-gold" data-testid="submit-btn" disabled>Submitting...</button>"#);
    } else {
        html.push_str(r#"<button type="submit" class="btn btn-gold" data-testid="submit-btn">Submit Inquiry</button>"#);
    }
    html.push_str("</form>");
    html
}

fn status_banner(status: &SubmissionStatus) -> String {
    let class = match status {
        SubmissionStatus::Idle => return String::new(),
        SubmissionStatus::Success(_) => "status success",
        SubmissionStatus::Error(_) => "status error",
    };
    let message = status.message().unwrap_or_default();
    format!(
        r#"<div class="{class}" data-testid="form-status" role="status">{}</div>"#,
        escape_html(message)
    )
}

fn whatsapp_line(contact: &WhatsApp) -> String {
    format!(
        r#"<div class="contact-item"><span class="gold">&#9742;</span><div><p class="label">WhatsApp - {office}</p><a href="{url}" target="_blank" rel="noopener noreferrer" class="gold">{display}</a></div></div>"#,
        office = contact.office,
        url = contact.chat_url(),
        display = contact.display,
    )
}

fn contact_aside() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div><div class="card" style="margin-bottom:32px"><h3 style="margin-bottom:24px">Get in Touch</h3>"#);
    html.push_str(&format!(
        r#"<div class="contact-item"><span class="gold">&#9993;</span><div><p class="label">Email</p><a href="mailto:{INQUIRIES_EMAIL}" class="muted">{INQUIRIES_EMAIL}</a></div></div>"#
    ));
    html.push_str(&whatsapp_line(&WHATSAPP_NEW_YORK));
    html.push_str(&whatsapp_line(&WHATSAPP_LONDON));
    let cities: Vec<_> = OFFICES.iter().map(|o| o.city).collect();
    html.push_str(&format!(
        r#"<div class="contact-item"><span class="gold">&#9906;</span><div><p class="label">Locations</p><p class="muted">{}</p></div></div></div>"#,
        cities.join(" | ")
    ));

    html.push_str(r#"<div class="card" style="margin-bottom:32px;border-color:rgba(34,197,94,.3)"><h3>Prefer WhatsApp?</h3><p style="margin-bottom:16px">Connect with us directly for immediate assistance.</p><div class="hero-actions" style="justify-content:flex-start">"#);
    for contact in [WHATSAPP_NEW_YORK, WHATSAPP_LONDON] {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">{}</a>"#,
            escape_html(&contact.greeting_url()),
            contact.office
        ));
    }
    html.push_str("</div></div>");

    html.push_str(r#"<div class="card dark" style="border-color:rgba(212,175,55,.3)"><h4 class="gold" style="font-family:var(--display);font-size:20px;margin-bottom:16px">Confidentiality Guarantee</h4><p style="font-size:14px">All inquiries are treated with the highest level of confidentiality. Your information will never be shared with third parties. We comply with all applicable AML regulations while maintaining your privacy.</p></div></div>"#);
    html
}

// ── 404 ──────────────────────────────────────────────────────────────

#[must_use]
pub fn not_found(path: &str) -> String {
    format!(
        r#"<div class="page" data-testid="not-found-page"><div class="container">{}<p style="text-align:center"><a href="/" class="btn btn-outline">Back to Home</a></p></div></div>"#,
        header(
            "Page Not Found",
            &format!(
                "We could not find <code>{}</code>. It may have moved.",
                escape_html(path)
            )
        )
    )
}

/// Generic error page body.
#[must_use]
pub fn error(message: &str) -> String {
    format!(
        r#"<div class="page" data-testid="error-page"><div class="container">{}<p style="text-align:center"><a href="/" class="btn btn-outline">Back to Home</a></p></div></div>"#,
        header("Something Went Wrong", &escape_html(message))
    )
}
