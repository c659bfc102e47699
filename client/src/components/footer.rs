//! Landing page footer.

use leptos::prelude::*;

use crate::content::{CLINIC_PHONE, FOOTER_LINKS, STREET_ADDRESS, SUPPORT_EMAIL, TRUST_BADGES};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <div class="site-footer__brand">
                        <span class="icon icon-heart-pulse"></span>
                        <span>"E-Health"</span>
                    </div>
                    <p>"Making healthcare accessible, secure, and convenient for everyone."</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <ul>
                        <li><span class="icon icon-phone"></span>{CLINIC_PHONE}</li>
                        <li><span class="icon icon-mail"></span>{SUPPORT_EMAIL}</li>
                        <li><span class="icon icon-map-pin"></span>{STREET_ADDRESS}</li>
                    </ul>
                </div>
                <div>
                    <h3>"Trust & Security"</h3>
                    <p>{TRUST_BADGES}</p>
                    <p class="site-footer__copyright">"© 2023 E-Health Appointment System. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
