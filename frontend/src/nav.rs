use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use shared::LogoView;
use crate::{config::CONFIG, logo::ImageWithFallback, styles::*};

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("Roadmap", "#roadmap"),
    ("Contact", "#contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub logo: LogoView,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<()>,
    pub on_logo_selected: Callback<File>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let file_input = use_node_ref();

    let open_picker = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let on_logo_selected = props.on_logo_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_logo_selected.emit(file);
            }
        })
    };

    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());
    let links = |class: &'static str| {
        NAV_LINKS.iter().map(|(label, href)| {
            let on_navigate = props.on_navigate.reform(|_: MouseEvent| ());
            html! { <a href={*href} {class} onclick={on_navigate}>{*label}</a> }
        }).collect::<Html>()
    };

    html! {
        <nav class="relative z-10 px-4 py-4 md:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    {match &props.logo {
                        LogoView::Image { src, alt } => html! {
                            <ImageWithFallback
                                src={src.clone()}
                                alt={*alt}
                                class={classes!("w-10", "h-10", "object-contain", "mr-2")}
                            />
                        },
                        LogoView::UploadButton => html! {
                            <>
                                <button
                                    type="button"
                                    onclick={open_picker}
                                    class="w-10 h-10 flex items-center justify-center rounded-full bg-gray-100 hover:bg-gray-200 transition-colors"
                                    title="Upload logo"
                                >
                                    <span class="text-gray-500">{"⬆"}</span>
                                </button>
                                <input
                                    type="file"
                                    accept="image/*"
                                    ref={file_input}
                                    class="hidden"
                                    onchange={on_file_change}
                                />
                            </>
                        },
                    }}
                    <span class={BRAND_GRADIENT}>{CONFIG.brand_name}</span>
                </div>

                <div class="md:hidden flex items-center space-x-2">
                    <button type="button" onclick={on_toggle} class={BUTTON_ICON} aria-label="Toggle menu">
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            if props.menu_open {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            } else {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            }
                        </svg>
                    </button>
                </div>

                <div class="hidden md:flex items-center space-x-8">
                    {links(NAV_LINK)}
                </div>
            </div>

            if props.menu_open {
                <div class="md:hidden absolute top-full left-0 right-0 bg-white shadow-lg p-4">
                    <div class="flex flex-col space-y-4">
                        {links(NAV_LINK)}
                    </div>
                </div>
            }
        </nav>
    }
}
