use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde_json::json;

use crate::core::content::{COMMODITY_COUNT, COMPANY_NAME, ContactDetails, PRODUCT_NAME};

const SITE_URL: &str = "https://agripredictai.com/";
const OG_IMAGE: &str = "https://agripredictai.com/og-image.png";
const PAGE_TITLE: &str = "AgriPredict - AI-Powered Essential Commodities Price Prediction";
const PAGE_DESCRIPTION: &str = "Monitoring 22 essential food commodities across 550 price reporting centers to stabilize market prices and support strategic interventions.";

/// schema.org description of the product for the JSON-LD block
pub fn structured_data() -> serde_json::Value {
    let contact = ContactDetails::default();
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": PAGE_DESCRIPTION,
        "url": SITE_URL,
        "author": {
            "@type": "Organization",
            "name": COMPANY_NAME,
            "email": contact.email,
            "telephone": contact.phone,
        },
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "description": "14-day free trial",
        },
        "featureList": [
            format!("Price prediction for {COMMODITY_COUNT} essential commodities"),
            "Seasonal and market trend analysis",
            "Buffer stock planning support",
        ],
    })
}

/// Head tags for the landing page
#[component]
pub fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="agricultural price prediction, commodity prices, AI forecasting, buffer stock, market intervention, food prices" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:image" content=OG_IMAGE />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content=SITE_URL />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=PAGE_DESCRIPTION />
        <Meta property="twitter:image" content=OG_IMAGE />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_names_product() {
        let data = structured_data();
        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], "AgriPredict");
        assert_eq!(data["author"]["name"], "AgriPredict AI");
        assert_eq!(data["featureList"].as_array().map(Vec::len), Some(3));
    }
}
