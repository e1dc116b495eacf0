use yew::prelude::*;
use shared::FooterLink;
use crate::{config::CONFIG, styles::*};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub links: Vec<FooterLink>,
    pub on_edit_links: Callback<()>,
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_edit_links = props.on_edit_links.reform(|_: MouseEvent| ());

    html! {
        <footer class="py-12 px-4 md:px-6 lg:px-8 bg-gray-900 text-white">
            <div class={SECTION_INNER}>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    <div>
                        <div class="text-2xl font-bold bg-gradient-to-r from-orange-400 to-yellow-400 bg-clip-text text-transparent mb-4">
                            {CONFIG.brand_name}
                        </div>
                        <p class="text-gray-400">
                            {"Transforming customer engagement through innovative rewards and gamification."}
                        </p>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold mb-4">{"Product"}</h3>
                        <ul class="space-y-2">
                            <li><a href="#features" class={FOOTER_LINK}>{"Features"}</a></li>
                            <li><a href="#pricing" class={FOOTER_LINK}>{"Pricing"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold mb-4">{"Company"}</h3>
                        <ul class="space-y-2">
                            <li><a href="#roadmap" class={FOOTER_LINK}>{"Roadmap"}</a></li>
                            <li><a href="#contact" class={FOOTER_LINK}>{"Contact"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="text-lg font-semibold">{"Connect"}</h3>
                            <button type="button" onclick={on_edit_links} class="text-xs text-gray-500 hover:text-white" title="Edit social links">
                                {"Edit"}
                            </button>
                        </div>
                        <ul class="space-y-2">
                            {for props.links.iter().map(|link| html! {
                                <li>
                                    <a
                                        href={link.href.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class={combine_classes(FOOTER_LINK, "flex items-center")}
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            })}
                        </ul>
                    </div>
                </div>
                <div class="mt-10 pt-6 border-t border-gray-800 text-center text-gray-500">
                    <p>{format!("© {} {}. All rights reserved.", current_year(), CONFIG.brand_name)}</p>
                </div>
            </div>
        </footer>
    }
}
