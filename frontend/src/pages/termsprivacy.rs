use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms of Service"}</h1>
            <p>{"SoftSell brokers the resale of unused software licenses between sellers and verified buyers."}</p>
            <h2>{"Listings"}</h2>
            <p>{"Sellers must hold transferable rights to every license they submit. We verify transferability with the vendor before any offer is made."}</p>
            <h2>{"Valuations and payment"}</h2>
            <p>{"Valuations typically land at 40-70% of retail value and remain valid for 14 days. Payment is issued within 3 business days of an accepted offer."}</p>
            <h2>{"Liability"}</h2>
            <p>{"SoftSell acts as an intermediary only and is not a party to the underlying license agreements."}</p>
            <p>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </p>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p>{"We collect only what the valuation process needs: your name, email, company, and the license details you submit."}</p>
            <h2>{"Chat assistant"}</h2>
            <p>{"Questions you ask the assistant are forwarded to a language-model provider to generate a reply. Conversations are not stored after you leave the page."}</p>
            <h2>{"Retention"}</h2>
            <p>{"Lead submissions are kept while your valuation is active and deleted on request."}</p>
            <p>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </p>
        </div>
    }
}
