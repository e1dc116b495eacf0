use web_sys::{File, Url};
use yew::prelude::*;
use shared::{LogoError, ObjectUrlStore};

/// Object URLs backed by `URL.createObjectURL`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserObjectUrls;

impl ObjectUrlStore for BrowserObjectUrls {
    type Handle = File;

    fn create(&self, file: &File) -> Result<String, LogoError> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| LogoError::PreviewUnavailable(format!("{:?}", e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            web_sys::console::log_1(&format!("Failed to revoke {}: {:?}", url, e).into());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let did_error = use_state(|| false);

    {
        let did_error = did_error.clone();
        use_effect_with_deps(move |_| {
            did_error.set(false);
            || ()
        }, props.src.clone());
    }

    if *did_error {
        return html! {
            <div
                class={classes!("inline-block", "bg-gray-100", "text-center", "align-middle", props.class.clone())}
                title={props.alt.clone()}
                data-original-url={props.src.clone()}
            >
                <div class="flex items-center justify-center w-full h-full text-gray-400">{"?"}</div>
            </div>
        };
    }

    let onerror = {
        let did_error = did_error.clone();
        Callback::from(move |_: Event| did_error.set(true))
    };

    html! {
        <img src={props.src.clone()} alt={props.alt.clone()} class={props.class.clone()} {onerror} />
    }
}
