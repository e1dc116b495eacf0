use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::{SocialLinks, SocialPlatform};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct SocialSettingsProps {
    pub links: SocialLinks,
    pub on_change: Callback<(SocialPlatform, String)>,
    pub on_close: Callback<()>,
    pub on_save: Callback<()>,
}

/// Modal for editing the footer's social profile URLs.
#[function_component(SocialSettings)]
pub fn social_settings(props: &SocialSettingsProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_save = props.on_save.reform(|_: MouseEvent| ());

    html! {
        <div class={MODAL_BACKDROP}>
            <div class={MODAL} role="dialog" aria-modal="true">
                <div class="flex justify-between items-center mb-6">
                    <h3 class="text-2xl font-bold">{"Connect Social Accounts"}</h3>
                    <button type="button" onclick={on_close} class="p-1 rounded-full hover:bg-gray-100" aria-label="Close">
                        {"✕"}
                    </button>
                </div>
                <div class="space-y-6">
                    {for SocialPlatform::ALL.iter().map(|&platform| {
                        let oninput = props.on_change.reform(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            (platform, input.value())
                        });
                        html! {
                            <div>
                                <label class={LABEL}>{format!("{} Profile URL", platform.label())}</label>
                                <input
                                    type="text"
                                    name={platform.key()}
                                    value={props.links.get(platform).to_string()}
                                    {oninput}
                                    placeholder={platform.placeholder()}
                                    class={INPUT_COMPACT}
                                />
                            </div>
                        }
                    })}
                </div>
                <div class="mt-8 flex justify-end">
                    <button type="button" onclick={on_save} class={button(BUTTON_SOLID)}>{"Save Changes"}</button>
                </div>
            </div>
        </div>
    }
}
