//! Page shell: document head, navigation bar, footer and the small script
//! that drives the bar in the browser.

use bullion_core::content::COMPANY_NAME;
use bullion_core::nav::{NAV_LINKS, NavState, REQUEST_QUOTE, SCROLL_THRESHOLD_PX};
use chrono::Datelike;

use super::escape_html;

/// Render a full HTML document around `content`.
///
/// `current_path` selects the highlighted navigation link.
#[must_use]
pub fn page(title: &str, current_path: &str, content: &str) -> String {
    render(title, current_path, content, chrono::Utc::now().year())
}

fn render(title: &str, current_path: &str, content: &str, year: i32) -> String {
    let mut html = String::with_capacity(16384 + content.len());
    html.push_str(r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>"#);
    html.push_str(&escape_html(title));
    html.push_str(" | ");
    html.push_str(COMPANY_NAME);
    html.push_str("</title>\n");
    html.push_str(SHELL_CSS);
    html.push_str("</head>\n<body>\n");
    html.push_str(&nav_bar(current_path, NavState::default()));
    html.push_str("<main>\n");
    html.push_str(content);
    html.push_str("\n</main>\n");
    html.push_str(&footer(year));
    html.push_str(&nav_script());
    html.push_str("</body>\n</html>");
    html
}

/// The top bar in the given state. The server always renders the initial
/// state; the script takes over from there.
#[must_use]
pub fn nav_bar(current_path: &str, state: NavState) -> String {
    let link = |href: &str, label: &str, test_id: &str, active: bool| -> String {
        let class = if active { "nav-link active" } else { "nav-link" };
        let mut s = String::with_capacity(128);
        s.push_str("<a href=\"");
        s.push_str(href);
        s.push_str("\" class=\"");
        s.push_str(class);
        s.push_str("\" data-testid=\"");
        s.push_str(test_id);
        s.push_str("\">");
        s.push_str(label);
        s.push_str("</a>");
        s
    };

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<nav id="navbar" data-testid="navbar" class="site-nav"#);
    if state.scrolled {
        html.push_str(" scrolled");
    }
    html.push_str(r#""><div class="nav-inner">"#);
    html.push_str(r#"<a href="/" class="logo" data-testid="logo-link"><span class="logo-mark">RIB</span><span class="logo-text"><span class="logo-name">Rock International</span><span class="logo-sub">BULLION</span></span></a>"#);

    html.push_str(r#"<div class="nav-links">"#);
    for nav in &NAV_LINKS {
        html.push_str(&link(
            nav.path,
            nav.label,
            &nav.test_id(),
            nav.is_active(current_path),
        ));
    }
    html.push_str(r#"<a href=""#);
    html.push_str(REQUEST_QUOTE.path);
    html.push_str(r#"" class="btn btn-gold" data-testid="nav-request-quote">"#);
    html.push_str(REQUEST_QUOTE.label);
    html.push_str("</a></div>");

    html.push_str(r#"<button id="menu-toggle" class="menu-toggle" data-testid="mobile-menu-btn" aria-controls="mobile-menu" aria-expanded=""#);
    html.push_str(if state.menu_open { "true" } else { "false" });
    html.push_str(r#"" aria-label="Menu">&#9776;</button></div>"#);

    html.push_str(r#"<div id="mobile-menu" class="mobile-menu"#);
    if state.menu_open {
        html.push_str(" open");
    }
    html.push_str(r#"">"#);
    for nav in &NAV_LINKS {
        let class = if nav.is_active(current_path) {
            "mobile-link active"
        } else {
            "mobile-link"
        };
        html.push_str(&format!(
            r#"<a href="{}" class="{class}">{}</a>"#,
            nav.path, nav.label
        ));
    }
    html.push_str(&format!(
        r#"<a href="{}" class="mobile-link btn btn-gold">{}</a>"#,
        REQUEST_QUOTE.path, REQUEST_QUOTE.label
    ));
    html.push_str("</div></nav>\n");
    html
}

fn footer(year: i32) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(FOOTER_TOP);
    html.push_str(&format!(
        r#"<div class="footer-bottom"><p>&copy; {year} {COMPANY_NAME}. All rights reserved.</p><p>New York | London</p></div>"#
    ));
    html.push_str("</div></footer>\n");
    html
}

/// Scroll threshold and menu behavior for the browser. The threshold is
/// taken from the same constant the server-side state uses.
fn nav_script() -> String {
    NAV_SCRIPT.replace("{{THRESHOLD}}", &SCROLL_THRESHOLD_PX.to_string())
}

const NAV_SCRIPT: &str = r#"<script>
(function(){
  var nav=document.getElementById('navbar');
  var menu=document.getElementById('mobile-menu');
  var toggle=document.getElementById('menu-toggle');
  function onScroll(){nav.classList.toggle('scrolled',window.scrollY>{{THRESHOLD}});}
  window.addEventListener('scroll',onScroll,{passive:true});
  onScroll();
  function setOpen(open){menu.classList.toggle('open',open);toggle.setAttribute('aria-expanded',open?'true':'false');}
  toggle.addEventListener('click',function(){setOpen(!menu.classList.contains('open'));});
  menu.querySelectorAll('a').forEach(function(a){a.addEventListener('click',function(){setOpen(false);});});
})();
</script>
"#;

const FOOTER_TOP: &str = r#"<footer class="site-footer" data-testid="footer"><div class="container">
<div class="footer-grid">
  <div class="footer-brand">
    <div class="footer-logo"><span class="logo-mark small">RIB</span><span class="gold display">Rock International Bullion</span></div>
    <p class="muted">Premium private gold acquisition services for discerning investors worldwide. Secure, confidential, and exclusive.</p>
  </div>
  <div>
    <h4 class="gold">Quick Links</h4>
    <ul class="footer-links">
      <li><a href="/products">Products</a></li>
      <li><a href="/services">Services</a></li>
      <li><a href="/about">About Us</a></li>
      <li><a href="/contact">Contact</a></li>
    </ul>
  </div>
  <div>
    <h4 class="gold">Legal</h4>
    <ul class="footer-links">
      <li><a href="/privacy-policy">Privacy Policy</a></li>
      <li><a href="/terms-of-service">Terms of Service</a></li>
      <li><a href="/aml-policy">AML Policy</a></li>
    </ul>
  </div>
</div>
"#;

/// Stylesheet for every page. Gold on near-black.
const SHELL_CSS: &str = r"<link rel=preconnect href=https://fonts.googleapis.com>
<link href=https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Playfair+Display:wght@500;700&display=swap rel=stylesheet>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--gold:#D4AF37;--gold-light:#E5C158;--gold-dark:#B8960C;--charcoal:#1A1A1A;--jet:#0A0A0A;--muted:#9CA3AF;--dim:#6B7280;--text:#D1D5DB;
  --gold-gradient:linear-gradient(135deg,#D4AF37 0%,#E5C158 50%,#B8960C 100%);--display:'Playfair Display',serif;--font:'Inter','Helvetica Neue',sans-serif}
body{font-family:var(--font);background:var(--jet);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
img{display:block;max-width:100%}
.container{max-width:1280px;margin:0 auto;padding:0 24px}
.display{font-family:var(--display)}
.gold{color:var(--gold)}
.muted{color:var(--muted)}
.white{color:#fff}
.site-nav{position:fixed;top:0;width:100%;z-index:50;padding:20px 0;transition:all .3s}
.site-nav.scrolled{background:rgba(10,10,10,.95);backdrop-filter:blur(12px);padding:12px 0}
.nav-inner{max-width:1280px;margin:0 auto;padding:0 24px;display:flex;align-items:center;justify-content:space-between}
.logo{display:flex;align-items:center;gap:12px}
.logo-mark{width:48px;height:48px;background:var(--gold-gradient);border-radius:4px;display:flex;align-items:center;justify-content:center;font-family:var(--display);font-weight:700;color:var(--jet);font-size:20px}
.logo-mark.small{width:40px;height:40px;font-size:16px}
.logo-text{display:flex;flex-direction:column}
.logo-name{font-family:var(--display);color:var(--gold);font-size:18px}
.logo-sub{font-size:11px;color:var(--muted);letter-spacing:.2em}
.nav-links{display:flex;align-items:center;gap:32px}
.nav-link{font-size:14px;letter-spacing:.03em;color:var(--text);transition:color .2s}
.nav-link:hover,.nav-link.active{color:var(--gold)}
.menu-toggle{display:none;background:none;border:none;color:var(--gold);font-size:28px;cursor:pointer}
.mobile-menu{display:none;background:var(--charcoal);border-top:1px solid rgba(212,175,55,.2);padding:16px 24px}
.mobile-link{display:block;padding:8px 0;color:var(--text)}
.mobile-link.active{color:var(--gold)}
.btn{display:inline-block;padding:12px 28px;font-weight:600;letter-spacing:.03em;transition:all .2s;cursor:pointer;border:none;font-family:var(--font);font-size:15px;text-align:center}
.btn-gold{background:var(--gold);color:var(--jet)}
.btn-gold:hover{background:var(--gold-light)}
.btn-outline{border:1px solid var(--gold);color:var(--gold)}
.btn-outline:hover{background:var(--gold);color:var(--jet)}
.btn-whatsapp{background:#16A34A;color:#fff}
.btn-whatsapp:hover{background:#15803D}
.page{padding:112px 0 64px;min-height:100vh}
.page-header{text-align:center;margin-bottom:64px}
.page-header h1{font-family:var(--display);font-size:44px;color:#fff;margin-bottom:16px;font-weight:500}
.page-header p{color:var(--muted);max-width:672px;margin:0 auto}
.rule{width:80px;height:4px;background:var(--gold);margin:16px auto 0}
.section{padding:96px 0}
.section.alt{background:var(--charcoal)}
.section-title{font-family:var(--display);font-size:36px;color:#fff;text-align:center;margin-bottom:16px;font-weight:500}
.hero{position:relative;min-height:100vh;display:flex;align-items:center;justify-content:center;overflow:hidden;background:linear-gradient(180deg,var(--jet),var(--charcoal),var(--jet))}
.hero-bg{position:absolute;inset:0;opacity:.2}
.hero-bg img{width:100%;height:100%;object-fit:cover}
.hero-inner{position:relative;z-index:1;text-align:center;padding:0 24px;max-width:896px}
.hero h1{font-family:var(--display);font-size:60px;line-height:1.1;margin-bottom:24px;font-weight:500}
.gold-text{background:var(--gold-gradient);-webkit-background-clip:text;background-clip:text;-webkit-text-fill-color:transparent}
.hero p{font-size:20px;color:var(--text);margin:0 auto 32px;max-width:672px}
.hero-actions{display:flex;gap:16px;justify-content:center;flex-wrap:wrap}
.grid{display:grid;gap:32px}
.grid-2{grid-template-columns:repeat(2,1fr)}
.grid-3{grid-template-columns:repeat(3,1fr)}
.grid-4{grid-template-columns:repeat(4,1fr)}
.card{background:var(--charcoal);border:1px solid rgba(212,175,55,.2);padding:32px;transition:border-color .2s}
.card:hover{border-color:rgba(212,175,55,.5)}
.card.dark{background:var(--jet)}
.card h3{font-family:var(--display);font-size:22px;color:#fff;margin-bottom:12px;font-weight:500}
.card p{color:var(--muted);font-size:15px}
.feature-icon{font-size:32px;color:var(--gold);margin-bottom:16px}
.spot-price{max-width:640px;margin:0 auto 48px;text-align:center;border:1px solid rgba(212,175,55,.3);padding:24px;background:var(--charcoal)}
.spot-price .price{font-family:var(--display);font-size:40px;color:var(--gold)}
.spot-price .meta{font-size:13px;color:var(--dim)}
.product-tile{background:var(--charcoal);border:1px solid rgba(212,175,55,.2);overflow:hidden}
.product-tile img{aspect-ratio:1/1;object-fit:cover;width:100%}
.product-tile .body{padding:20px}
.product-tile h3{font-family:var(--display);color:#fff;font-size:18px;margin-bottom:8px}
.product-card{display:flex;background:var(--charcoal);border:1px solid rgba(212,175,55,.2)}
.product-card .image{width:40%;background:var(--jet);overflow:hidden}
.product-card .image img{width:100%;height:100%;object-fit:cover}
.product-card .body{width:60%;padding:24px;display:flex;flex-direction:column;justify-content:space-between}
.product-card h3{font-family:var(--display);font-size:24px;color:#fff;margin-bottom:16px}
.specs{display:grid;grid-template-columns:1fr 1fr;gap:12px;margin-bottom:20px}
.spec{background:rgba(10,10,10,.5);padding:12px;border-radius:4px}
.spec .label{display:block;font-size:12px;color:var(--dim);margin-bottom:4px}
.spec .value{color:var(--gold);font-weight:600}
.badge{display:inline-block;background:rgba(212,175,55,.1);color:var(--gold);font-size:12px;padding:4px 12px;border-radius:999px;border:1px solid rgba(212,175,55,.3);margin-bottom:16px}
.empty{text-align:center;color:var(--muted);padding:48px 0}
.ticks{list-style:none}
.ticks li{padding:4px 0 4px 20px;position:relative;font-size:14px;color:var(--text)}
.ticks li::before{content:'\203A';position:absolute;left:0;color:var(--gold)}
.tier.popular{border-color:var(--gold);transform:scale(1.04)}
.tier .tag{display:inline-block;background:var(--gold);color:var(--jet);font-size:12px;font-weight:700;padding:4px 12px;margin-bottom:16px}
.tier .min{color:var(--gold);font-size:18px;font-weight:600;margin-bottom:24px}
.stat{background:var(--jet);border:1px solid rgba(212,175,55,.2);padding:16px;text-align:center}
.stat .n{font-family:var(--display);font-size:30px;color:var(--gold)}
.avatar{width:128px;height:128px;border-radius:50%;background:var(--gold-gradient);display:flex;align-items:center;justify-content:center;margin:0 auto 24px;font-family:var(--display);font-size:36px;color:var(--jet);font-weight:700}
.cta-band{text-align:center;background:linear-gradient(90deg,var(--charcoal),var(--jet),var(--charcoal));border:1px solid rgba(212,175,55,.3);padding:40px;margin-top:64px}
.cta-band h3{font-family:var(--display);font-size:26px;color:#fff;margin-bottom:16px;font-weight:500}
.cta-band p{color:var(--muted);margin:0 auto 24px;max-width:768px}
form .field{margin-bottom:24px}
form label{display:block;font-size:14px;color:var(--muted);margin-bottom:8px}
form input,form select,form textarea{width:100%;background:var(--charcoal);border:1px solid rgba(212,175,55,.3);padding:12px 16px;color:#fff;font-family:var(--font);font-size:15px}
form input:focus,form select:focus,form textarea:focus{border-color:var(--gold);outline:none}
form .btn{width:100%;font-size:18px;padding:16px}
form .btn:disabled{opacity:.5;cursor:not-allowed}
.status{padding:16px;margin-bottom:24px}
.status.success{background:rgba(20,83,45,.3);border:1px solid rgba(34,197,94,.3);color:#4ADE80}
.status.error{background:rgba(127,29,29,.3);border:1px solid rgba(239,68,68,.3);color:#F87171}
.contact-item{display:flex;gap:16px;margin-bottom:24px}
.contact-item .label{color:#fff;font-weight:500}
.legal{max-width:896px;margin:0 auto}
.legal section{margin-bottom:40px}
.legal h2{font-family:var(--display);font-size:24px;color:var(--gold);margin-bottom:16px;font-weight:500}
.legal p,.legal li{color:var(--text);margin-bottom:12px}
.legal ul{padding-left:24px}
.legal strong{color:#fff}
.legal a{color:var(--gold)}
.site-footer{background:var(--jet);border-top:1px solid rgba(212,175,55,.1);padding:64px 0}
.footer-grid{display:grid;grid-template-columns:2fr 1fr 1fr;gap:40px}
.footer-logo{display:flex;align-items:center;gap:12px;margin-bottom:16px}
.footer-links{list-style:none;font-size:14px;color:var(--muted)}
.footer-links li{margin-bottom:8px}
.footer-links a:hover{color:var(--gold)}
.site-footer h4{margin-bottom:16px;font-weight:600}
.footer-bottom{border-top:1px solid rgba(212,175,55,.1);margin-top:40px;padding-top:32px;text-align:center;font-size:14px;color:var(--dim)}
.footer-bottom p+p{margin-top:8px}
@media(max-width:900px){
  .nav-links{display:none}.menu-toggle{display:block}.mobile-menu.open{display:block}
  .grid-2,.grid-3,.grid-4,.footer-grid{grid-template-columns:1fr}
  .product-card{flex-direction:column}.product-card .image,.product-card .body{width:100%}
  .hero h1{font-size:36px}.logo-text{display:none}
}
</style>
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_is_highlighted() {
        let html = nav_bar("/services", NavState::default());
        assert!(html.contains(
            r#"<a href="/services" class="nav-link active" data-testid="nav-services">Services</a>"#
        ));
        assert!(html.contains(
            r#"<a href="/products" class="nav-link" data-testid="nav-products">Products</a>"#
        ));
        assert!(html.contains(r#"data-testid="nav-request-quote""#));
    }

    #[test]
    fn nav_reflects_state() {
        let closed = nav_bar("/", NavState::default());
        assert!(closed.contains(r#"class="site-nav">"#));
        assert!(closed.contains(r#"class="mobile-menu">"#));
        assert!(closed.contains(r#"aria-expanded="false""#));

        let open = nav_bar(
            "/",
            NavState {
                menu_open: true,
                scrolled: true,
            },
        );
        assert!(open.contains(r#"class="site-nav scrolled">"#));
        assert!(open.contains(r#"class="mobile-menu open">"#));
        assert!(open.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn footer_carries_year_and_legal_links() {
        let html = render("About", "/about", "<p>x</p>", 2031);
        assert!(html.contains("&copy; 2031 Rock International Bullion. All rights reserved."));
        assert!(html.contains(r#"href="/aml-policy""#));
        assert!(html.contains("<title>About | Rock International Bullion</title>"));
    }

    #[test]
    fn script_uses_shared_threshold() {
        let script = nav_script();
        assert!(script.contains("window.scrollY>50"));
        assert!(!script.contains("{{THRESHOLD}}"));
    }
}
