use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadCaptureForm;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                :root, :root[data-theme="light"] {
                    --primary-color: #0d6efd;
                    --page-bg: #ffffff;
                    --section-alt-bg: #f8f9fa;
                    --text-color: #212529;
                    --muted-text: #6c757d;
                    --card-bg: #ffffff;
                    --card-border: #dee2e6;
                    --card-shadow: 0 5px 15px rgba(0, 0, 0, 0.08);
                    --input-bg: #ffffff;
                    --input-border: #ced4da;
                }
                :root[data-theme="dark"] {
                    --primary-color: #0d6efd;
                    --page-bg: #212529;
                    --section-alt-bg: #2c3034;
                    --text-color: #f8f9fa;
                    --muted-text: #adb5bd;
                    --card-bg: #2c3034;
                    --card-border: #495057;
                    --card-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
                    --input-bg: #343a40;
                    --input-border: #495057;
                }
                body {
                    margin: 0;
                    background: var(--page-bg);
                    color: var(--text-color);
                    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 1040;
                    background: var(--page-bg);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled { box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15); }
                .nav-content {
                    max-width: 1140px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1rem;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text-color);
                    text-decoration: none;
                }
                .nav-logo-accent { color: var(--primary-color); }
                .nav-right { display: flex; align-items: center; gap: 1rem; }
                .nav-link { color: var(--text-color); text-decoration: none; }
                .nav-link:hover { color: var(--primary-color); }
                .theme-toggle {
                    background: none;
                    border: 1px solid var(--primary-color);
                    border-radius: 6px;
                    padding: 0.25rem 0.5rem;
                    cursor: pointer;
                }
                .burger-menu { display: none; }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 5px 0;
                        background: var(--text-color);
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        right: 0;
                        flex-direction: column;
                        background: var(--page-bg);
                        padding: 1rem 2rem;
                        box-shadow: var(--card-shadow);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                .hero-section {
                    background: linear-gradient(135deg, var(--primary-color), #084298);
                    color: #fff;
                    padding: 8rem 1rem 5rem;
                }
                .hero-inner {
                    max-width: 1140px;
                    margin: 0 auto;
                }
                .hero-inner h1 { font-size: 3rem; margin-bottom: 1.5rem; }
                .hero-inner .lead { font-size: 1.25rem; margin-bottom: 2rem; }
                .hero-cta-group { display: flex; gap: 1rem; flex-wrap: wrap; }
                .hero-cta {
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 2rem;
                    font-weight: 700;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .hero-cta.primary { background: #fff; color: var(--primary-color); }
                .hero-cta.outline {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                }
                .section { padding: 4rem 1rem; }
                .section.alt { background: var(--section-alt-bg); }
                .section-inner { max-width: 1140px; margin: 0 auto; }
                .section-header { text-align: center; margin-bottom: 3rem; }
                .section-header h2 { font-size: 2.25rem; margin-bottom: 0.75rem; }
                .section-header .lead { color: var(--muted-text); font-size: 1.15rem; }
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .step .step-icon { font-size: 3rem; margin-bottom: 1rem; }
                .cards-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card {
                    background: var(--card-bg);
                    border: 1px solid var(--card-border);
                    border-radius: 12px;
                    box-shadow: var(--card-shadow);
                    padding: 1.5rem;
                    text-align: center;
                }
                .feature-card .card-icon { font-size: 2.5rem; color: var(--primary-color); }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .testimonial-card {
                    background: var(--card-bg);
                    border-radius: 12px;
                    box-shadow: var(--card-shadow);
                    padding: 1.5rem;
                }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .testimonial-author .avatar {
                    width: 60px;
                    height: 60px;
                    border-radius: 50%;
                    background: var(--primary-color);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .testimonial-author .role { color: var(--muted-text); margin: 0; }
                .contact-card {
                    max-width: 820px;
                    margin: 0 auto;
                    background: var(--card-bg);
                    border-radius: 12px;
                    box-shadow: var(--card-shadow);
                    padding: 2.5rem;
                }
                .lead-form .form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1rem;
                }
                .lead-form .form-group { margin-bottom: 1rem; display: flex; flex-direction: column; }
                .lead-form label { margin-bottom: 0.35rem; }
                .lead-form .required-mark { color: #dc3545; }
                .form-input {
                    background: var(--input-bg);
                    color: var(--text-color);
                    border: 1px solid var(--input-border);
                    border-radius: 8px;
                    padding: 0.6rem 0.75rem;
                    font-size: 1rem;
                }
                .form-input.invalid { border-color: #dc3545; }
                .field-error { color: #dc3545; font-size: 0.85rem; margin-top: 0.25rem; }
                .success-message {
                    background: rgba(25, 135, 84, 0.15);
                    color: #198754;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                }
                .form-submit { text-align: center; margin-top: 1rem; }
                .submit-button {
                    background: var(--primary-color);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 3rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .site-footer {
                    background: #1a1d20;
                    color: #f8f9fa;
                    padding: 2.5rem 1rem;
                    margin-top: 3rem;
                }
                .footer-inner {
                    max-width: 1140px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-links a { color: #f8f9fa; margin-left: 1rem; }
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 7rem 1rem 3rem;
                }
                "#}
            </style>

            <header id="home" class="hero-section">
                <div class="hero-inner">
                    <h1>{"Unlock the Value of Your Unused Software"}</h1>
                    <p class="lead">
                        {"SoftSell is the premier marketplace for buying and selling unused software licenses. \
                          Turn your idle software assets into cash with our secure platform."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="/#contact"><button class="hero-cta primary">{"Sell My Licenses"}</button></a>
                        <a href="/#contact"><button class="hero-cta outline">{"Get a Quote"}</button></a>
                    </div>
                </div>
            </header>

            <section id="how-it-works" class="section alt">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"How It Works"}</h2>
                        <p class="lead">{"Our simple three-step process makes selling software licenses easy and secure."}</p>
                    </div>
                    <div class="steps-grid">
                        <div class="step">
                            <div class="step-icon">{"📤"}</div>
                            <h3>{"1. Upload License"}</h3>
                            <p>
                                {"Upload your unused software license information through our secure portal. \
                                  We support all major software vendors and license types."}
                            </p>
                        </div>
                        <div class="step">
                            <div class="step-icon">{"💵"}</div>
                            <h3>{"2. Get Valuation"}</h3>
                            <p>
                                {"Our expert team analyzes your license and provides a fair market valuation \
                                  based on current demand and pricing trends."}
                            </p>
                        </div>
                        <div class="step">
                            <div class="step-icon">{"🤝"}</div>
                            <h3>{"3. Get Paid"}</h3>
                            <p>
                                {"Once you accept our offer, we handle the transfer process and you receive \
                                  payment through your preferred method within 3 business days."}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="why-us" class="section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Why Choose SoftSell"}</h2>
                        <p class="lead">{"We're revolutionizing how businesses manage their software assets."}</p>
                    </div>
                    <div class="cards-grid">
                        <div class="feature-card">
                            <div class="card-icon">{"🛡️"}</div>
                            <h4>{"Secure & Compliant"}</h4>
                            <p>{"All transactions are verified and compliant with licensing regulations and vendor policies."}</p>
                        </div>
                        <div class="feature-card">
                            <div class="card-icon">{"🚀"}</div>
                            <h4>{"Fast Processing"}</h4>
                            <p>{"Get valuations within 24 hours and payment processed within 3 business days."}</p>
                        </div>
                        <div class="feature-card">
                            <div class="card-icon">{"🌍"}</div>
                            <h4>{"Global Network"}</h4>
                            <p>{"Access to thousands of buyers worldwide ensures maximum value for your licenses."}</p>
                        </div>
                        <div class="feature-card">
                            <div class="card-icon">{"💲"}</div>
                            <h4>{"Best Rates"}</h4>
                            <p>{"Our pricing algorithm ensures you get the highest possible value for your software licenses."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="testimonials" class="section alt">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Customer Success Stories"}</h2>
                        <p class="lead">{"Don't just take our word for it - hear from our satisfied customers."}</p>
                    </div>
                    <div class="testimonials-grid">
                        <div class="testimonial-card">
                            <div class="testimonial-author">
                                <div class="avatar">{"JS"}</div>
                                <div>
                                    <h4>{"Jane Smith"}</h4>
                                    <p class="role">{"IT Director, Acme Corp"}</p>
                                </div>
                            </div>
                            <p>
                                {"\"SoftSell helped us recover over $85,000 from unused enterprise software licenses. \
                                   The process was smooth and their team was professional throughout. I highly recommend \
                                   their services to any company looking to optimize their software assets.\""}
                            </p>
                        </div>
                        <div class="testimonial-card">
                            <div class="testimonial-author">
                                <div class="avatar">{"MD"}</div>
                                <div>
                                    <h4>{"Michael Davis"}</h4>
                                    <p class="role">{"CFO, TechInnovate"}</p>
                                </div>
                            </div>
                            <p>
                                {"\"As a fast-growing startup, we needed to be smart with our budget. SoftSell allowed \
                                   us to purchase legitimate software licenses at a fraction of the retail cost. Their \
                                   verification process gave us peace of mind that everything was above board.\""}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="contact" class="section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Get Started Today"}</h2>
                        <p class="lead">{"Fill out the form below for a free valuation of your software licenses."}</p>
                    </div>
                    <div class="contact-card">
                        <LeadCaptureForm />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-inner">
                    <div>
                        <h3><span class="nav-logo-accent">{"Soft"}</span>{"Sell"}</h3>
                        <p>{"The premier marketplace for software license resale."}</p>
                    </div>
                    <div class="footer-links">
                        <p>{"© 2026 SoftSell. All rights reserved."}</p>
                        <div>
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                            <a href="/#contact">{"Contact Us"}</a>
                        </div>
                    </div>
                </div>
            </footer>
        </div>
    }
}
