use leptos::prelude::*;

use crate::core::clock::{copyright_line, current_year};
use crate::core::content::{
    COMPANY_LOGO, COMPANY_NAME, ContactDetails, FooterLink, LOGO_FALLBACK, SocialLinks,
    default_footer_links, default_social_links, split_footer_links,
};
use crate::ui::icon::{Icon, icons};

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Cookie Policy", "/cookies"),
];

/// Site footer: brand, link columns, contact details and the legal strip
#[component]
pub fn Footer(
    #[prop(optional, into)] company_name: Option<String>,
    #[prop(optional, into)] company_logo: Option<String>,
    #[prop(optional, into)] contact: Option<ContactDetails>,
    #[prop(optional, into)] social_links: Option<SocialLinks>,
    #[prop(optional, into)] navigation_links: Option<Vec<FooterLink>>,
) -> impl IntoView {
    let company_name = company_name.unwrap_or_else(|| COMPANY_NAME.into());
    let contact = contact.unwrap_or_default();
    let social_links = social_links.unwrap_or_else(default_social_links);
    let navigation_links = navigation_links.unwrap_or_else(default_footer_links);
    let (quick_links, resources) = split_footer_links(&navigation_links);

    let logo_src = RwSignal::new(company_logo.unwrap_or_else(|| COMPANY_LOGO.into()));
    let on_logo_error = move |_| {
        // Swap once; a broken fallback must not loop
        if logo_src.with_untracked(|src| src != LOGO_FALLBACK) {
            logo_src.set(LOGO_FALLBACK.into());
        }
    };

    let copyright = copyright_line(current_year(), &company_name);

    view! {
        <footer class="w-full bg-black text-white py-12 px-6 md:px-12">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    // Company info
                    <div class="space-y-4">
                        <div class="flex items-center space-x-2">
                            <img
                                src=move || logo_src.get()
                                alt=format!("{company_name} logo")
                                class="h-8 w-auto"
                                on:error=on_logo_error
                            />
                            <h3 class="text-xl font-bold">{company_name.clone()}</h3>
                        </div>
                        <p class="text-gray-400 text-sm">
                            "Revolutionizing agricultural price prediction with cutting-edge AI technology."
                        </p>
                        <div class="flex space-x-4 pt-2">
                            {social_links
                                .entries()
                                .into_iter()
                                .map(|(label, icon, url)| view! {
                                    <a
                                        href=url
                                        aria-label=label
                                        class="opacity-60 hover:opacity-100 transition-opacity"
                                        rel="noopener noreferrer"
                                        target="_blank"
                                    >
                                        <Icon name=icon />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LinkColumn heading="Quick Links" links=quick_links.to_vec() />
                    <LinkColumn heading="Resources" links=resources.to_vec() />

                    // Contact info
                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold">"Contact Us"</h3>
                        <div class="space-y-3">
                            <div class="flex items-start space-x-3">
                                <Icon name=icons::MAIL class="w-[18px] h-[18px] mt-0.5 opacity-60"/>
                                <a href=contact.mailto() class="text-gray-400 hover:text-white transition-colors text-sm">
                                    {contact.email.clone()}
                                </a>
                            </div>
                            <div class="flex items-start space-x-3">
                                <Icon name=icons::PHONE class="w-[18px] h-[18px] mt-0.5 opacity-60"/>
                                <a href=contact.tel() class="text-gray-400 hover:text-white transition-colors text-sm">
                                    {contact.phone.clone()}
                                </a>
                            </div>
                            <div class="flex items-start space-x-3">
                                <Icon name=icons::MAP_PIN class="w-[18px] h-[18px] mt-0.5 opacity-60"/>
                                <span class="text-gray-400 text-sm">{contact.address.clone()}</span>
                            </div>
                        </div>
                        <a
                            href=contact.mailto()
                            class="mt-4 inline-flex h-10 items-center justify-center rounded-md border border-gray-700 px-4 text-sm font-medium text-gray-300 hover:bg-gray-800 hover:text-white transition-colors"
                        >
                            "Contact Support"
                        </a>
                    </div>
                </div>

                <div class="my-8 h-px w-full bg-gray-800" role="separator"></div>

                <div class="flex flex-col md:flex-row justify-between items-center text-sm text-gray-500">
                    <p>{copyright}</p>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        {LEGAL_LINKS
                            .iter()
                            .map(|(title, href)| view! {
                                <a href=*href class="hover:text-white transition-colors">{*title}</a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: Vec<FooterLink>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold">{heading}</h3>
            <ul class="space-y-2">
                {links
                    .into_iter()
                    .map(|link| view! {
                        <li>
                            <a href=link.href class="text-gray-400 hover:text-white transition-colors text-sm">
                                {link.title}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
