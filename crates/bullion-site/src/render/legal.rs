//! Privacy, terms and AML policy pages.

use bullion_core::content::{COMPLIANCE_EMAIL, LEGAL_EMAIL, PRIVACY_EMAIL};

const LAST_UPDATED: &str = "December 2025";

#[must_use]
pub fn privacy_policy() -> String {
    document(
        "privacy-policy-page",
        "Privacy Policy",
        PRIVACY_SECTIONS,
        "8. Contact Us",
        "For privacy-related inquiries or to exercise your rights, please contact our Privacy Officer at",
        PRIVACY_EMAIL,
    )
}

#[must_use]
pub fn terms_of_service() -> String {
    document(
        "terms-of-service-page",
        "Terms of Service",
        TERMS_SECTIONS,
        "11. Contact Information",
        "For questions regarding these Terms of Service, please contact us at",
        LEGAL_EMAIL,
    )
}

#[must_use]
pub fn aml_policy() -> String {
    document(
        "aml-policy-page",
        "Anti-Money Laundering Policy",
        AML_SECTIONS,
        "12. Contact Information",
        "For questions regarding our AML Policy or to report suspicious activities, please contact our Compliance Department at",
        COMPLIANCE_EMAIL,
    )
}

fn document(
    test_id: &str,
    title: &str,
    sections: &str,
    contact_heading: &str,
    contact_text: &str,
    email: &str,
) -> String {
    let mut html = String::with_capacity(sections.len() + 1024);
    html.push_str(&format!(
        r#"<div class="page" data-testid="{test_id}"><div class="container">
<div class="page-header"><h1>{title}</h1><p>Last Updated: {LAST_UPDATED}</p><div class="rule"></div></div>
<div class="legal">"#
    ));
    html.push_str(sections);
    html.push_str(&format!(
        r#"<section><h2>{contact_heading}</h2><p>{contact_text} <a href="mailto:{email}">{email}</a></p></section>"#
    ));
    html.push_str("</div></div></div>");
    html
}

const PRIVACY_SECTIONS: &str = r#"
<section><h2>1. Introduction</h2>
<p>Rock International Bullion ("we," "our," or "us") is committed to protecting the privacy and confidentiality of our clients. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you engage with our services or visit our website. As a premier private gold dealership, we understand that discretion is paramount to our clients.</p></section>
<section><h2>2. Information We Collect</h2>
<p><strong>Personal Information:</strong> Name, email address, telephone number, country of residence, and preferred method of contact.</p>
<p><strong>Transaction Information:</strong> Details of gold purchases, payment information, delivery addresses, and transaction history.</p>
<p><strong>Identity Verification:</strong> Government-issued identification documents as required by applicable anti-money laundering regulations.</p>
<p><strong>Communication Records:</strong> Records of correspondence and consultations with our team.</p></section>
<section><h2>3. How We Use Your Information</h2><ul>
<li>To process and fulfill your gold acquisition requests</li>
<li>To communicate with you regarding your account and transactions</li>
<li>To comply with legal and regulatory requirements</li>
<li>To provide personalized investment insights and market updates</li>
<li>To improve our services and client experience</li>
<li>To prevent fraud and ensure the security of transactions</li></ul></section>
<section><h2>4. Information Sharing &amp; Disclosure</h2>
<p>We do not sell, trade, or rent your personal information to third parties. We may share your information only in the following circumstances:</p><ul>
<li><strong>Service Providers:</strong> Trusted partners who assist in delivery, vaulting, and secure logistics</li>
<li><strong>Legal Compliance:</strong> When required by law, court order, or regulatory authority</li>
<li><strong>With Your Consent:</strong> When you have provided explicit written authorization</li></ul></section>
<section><h2>5. Data Security</h2>
<p>We implement industry-leading security measures to protect your personal information, including: encrypted communications, secure data storage, access controls, and regular security audits. Our systems are designed to meet the highest standards of data protection utilized by leading financial institutions.</p></section>
<section><h2>6. Data Retention</h2>
<p>We retain your personal information for as long as necessary to fulfill the purposes outlined in this policy, comply with legal obligations, resolve disputes, and enforce our agreements. Transaction records are maintained in accordance with applicable financial regulations.</p></section>
<section><h2>7. Your Rights</h2><p>You have the right to:</p><ul>
<li>Access the personal information we hold about you</li>
<li>Request correction of inaccurate information</li>
<li>Request deletion of your data (subject to legal requirements)</li>
<li>Opt-out of marketing communications</li>
<li>Lodge a complaint with a supervisory authority</li></ul></section>
"#;

const TERMS_SECTIONS: &str = r#"
<section><h2>1. Acceptance of Terms</h2>
<p>By accessing or using the services of Rock International Bullion ("Company," "we," "our"), you agree to be bound by these Terms of Service. If you do not agree to these terms, please do not use our services. These terms constitute a legally binding agreement between you and Rock International Bullion.</p></section>
<section><h2>2. Services Description</h2>
<p>Rock International Bullion provides private gold acquisition services, including but not limited to: sourcing LBMA-certified gold bars, secure storage arrangements through partner facilities, insured international delivery, and investment consultation. All services are provided on a private, invitation-only basis.</p></section>
<section><h2>3. Eligibility Requirements</h2>
<p>To engage our services, you must:</p><ul>
<li>Be at least 18 years of age or the age of majority in your jurisdiction</li>
<li>Have the legal capacity to enter into binding contracts</li>
<li>Provide accurate and complete identification documentation</li>
<li>Not be subject to any sanctions or restrictions that would prohibit gold transactions</li>
<li>Have funds from legitimate, verifiable sources</li></ul></section>
<section><h2>4. Pricing &amp; Payment</h2>
<p><strong>Quotations:</strong> All gold prices are quoted based on current market rates plus applicable premiums. Quotations are valid for the time period specified and are subject to change.</p>
<p><strong>Payment:</strong> Full payment is required before gold is dispatched. We accept wire transfers from verified bank accounts. Payment terms are specified in each individual transaction agreement.</p>
<p><strong>Taxes &amp; Duties:</strong> Clients are responsible for any applicable taxes, import duties, or other governmental charges in their jurisdiction.</p></section>
<section><h2>5. Delivery &amp; Risk Transfer</h2>
<p>All deliveries are fully insured during transit. Risk of loss transfers to the client upon delivery and signature confirmation. Delivery timelines are estimates and may vary based on destination, customs processing, and other factors beyond our control. Special delivery arrangements may be made for high-value acquisitions.</p></section>
<section><h2>6. Product Authenticity</h2>
<p>All gold products supplied by Rock International Bullion are sourced exclusively from LBMA-accredited refineries and come with original assay certificates. We guarantee the authenticity, weight, and purity of all products as specified. Any concerns regarding authenticity must be reported within 7 days of delivery.</p></section>
<section><h2>7. Limitation of Liability</h2>
<p>To the maximum extent permitted by law, Rock International Bullion shall not be liable for any indirect, incidental, special, consequential, or punitive damages, including loss of profits, arising from your use of our services. Our total liability shall not exceed the value of the specific transaction giving rise to the claim.</p></section>
<section><h2>8. Confidentiality</h2>
<p>We maintain strict confidentiality regarding all client transactions and information. Both parties agree not to disclose the terms of any transaction to third parties except as required by law or with prior written consent. This obligation survives the termination of any business relationship.</p></section>
<section><h2>9. Governing Law &amp; Disputes</h2>
<p>These Terms shall be governed by and construed in accordance with the laws of the State of New York, United States. Any disputes arising from these terms or our services shall be resolved through confidential arbitration in New York City, unless otherwise agreed in writing.</p></section>
<section><h2>10. Modifications</h2>
<p>We reserve the right to modify these Terms of Service at any time. Material changes will be communicated to active clients. Continued use of our services after such modifications constitutes acceptance of the updated terms.</p></section>
"#;

const AML_SECTIONS: &str = r"
<section><h2>1. Policy Statement</h2>
<p>Rock International Bullion is committed to the highest standards of Anti-Money Laundering (AML) and Counter-Terrorist Financing (CTF) compliance. We maintain a robust compliance program designed to prevent our services from being used to facilitate money laundering, terrorist financing, or other financial crimes. This policy applies to all employees, officers, and business partners.</p></section>
<section><h2>2. Regulatory Framework</h2>
<p>Our AML program is designed to comply with applicable laws and regulations, including:</p><ul>
<li>The Bank Secrecy Act (BSA) and its implementing regulations</li>
<li>USA PATRIOT Act provisions</li>
<li>Financial Crimes Enforcement Network (FinCEN) requirements</li>
<li>Office of Foreign Assets Control (OFAC) sanctions programs</li>
<li>UK Money Laundering Regulations</li>
<li>Financial Action Task Force (FATF) recommendations</li></ul></section>
<section><h2>3. Customer Due Diligence (CDD)</h2>
<p>We conduct thorough due diligence on all clients, which includes:</p>
<p><strong>Identity Verification:</strong> Collection and verification of government-issued identification, proof of address, and other relevant documentation.</p>
<p><strong>Beneficial Ownership:</strong> Identification of ultimate beneficial owners for corporate clients and trusts.</p>
<p><strong>Source of Funds:</strong> Verification that funds used for transactions are derived from legitimate sources.</p>
<p><strong>Risk Assessment:</strong> Evaluation of client risk profile based on various factors including geography, transaction patterns, and business purpose.</p></section>
<section><h2>4. Enhanced Due Diligence (EDD)</h2>
<p>Enhanced due diligence measures are applied to higher-risk clients, including:</p><ul>
<li>Politically Exposed Persons (PEPs) and their family members</li>
<li>Clients from high-risk jurisdictions</li>
<li>Complex ownership structures</li>
<li>Unusually large or frequent transactions</li>
<li>Clients with adverse media coverage</li></ul></section>
<section><h2>5. Transaction Monitoring</h2>
<p>We maintain ongoing monitoring systems to detect suspicious activities, including: unusual transaction patterns, transactions inconsistent with client profile, attempts to structure transactions to avoid reporting thresholds, and transactions involving high-risk jurisdictions. All suspicious activities are promptly investigated and reported as required.</p></section>
<section><h2>6. Sanctions Screening</h2>
<p>All clients and transactions are screened against relevant sanctions lists, including: OFAC Specially Designated Nationals (SDN) List, UN Security Council Sanctions Lists, EU Consolidated Sanctions List, and UK HM Treasury Sanctions List. We do not engage in any transactions with sanctioned individuals, entities, or jurisdictions.</p></section>
<section><h2>7. Record Keeping</h2>
<p>We maintain comprehensive records of all client identification documents, transaction records, and due diligence documentation for a minimum of five years after the end of the business relationship or completion of the transaction, or longer as required by applicable law.</p></section>
<section><h2>8. Reporting Obligations</h2>
<p>We comply with all applicable reporting requirements, including the filing of Suspicious Activity Reports (SARs) and Currency Transaction Reports (CTRs) as required. Our compliance team is trained to identify and escalate potentially suspicious activities for review and potential reporting.</p></section>
<section><h2>9. Employee Training</h2>
<p>All employees receive comprehensive AML training upon hire and ongoing training thereafter. Training covers recognition of suspicious activities, reporting procedures, regulatory requirements, and the consequences of non-compliance. Training records are maintained as part of our compliance documentation.</p></section>
<section><h2>10. Compliance Officer</h2>
<p>Our designated AML Compliance Officer is responsible for overseeing the implementation of this policy, ensuring regulatory compliance, coordinating with law enforcement when necessary, and reporting to senior management and the board on AML matters.</p></section>
<section><h2>11. Client Cooperation</h2>
<p>By engaging our services, clients agree to provide accurate information, respond promptly to requests for additional documentation, and notify us of any material changes to their information. Failure to cooperate with AML requirements may result in termination of the business relationship.</p></section>
";
