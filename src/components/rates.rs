//! Market data widgets shown in the header strip.

use dioxus::prelude::*;

use crate::api;

/// Refresh cadence for both widgets.
#[cfg(feature = "web")]
const REFRESH_MS: u32 = 5_000;

/// Live USD/TRY exchange rate.
#[component]
pub fn UsdTryRate() -> Element {
    let mut rate = use_signal(|| None::<f64>);
    let mut error = use_signal(|| None::<String>);

    use_future(move || async move {
        loop {
            match api::usd_try_rate().await {
                Ok(response) => {
                    rate.set(Some(response.usd_try));
                    error.set(None);
                }
                Err(err) => {
                    rate.set(None);
                    error.set(Some(err.to_string()));
                }
            }

            #[cfg(feature = "web")]
            gloo_timers::future::TimeoutFuture::new(REFRESH_MS).await;
            #[cfg(not(feature = "web"))]
            break;
        }
    });

    rsx! {
        div {
            if let Some(value) = rate() {
                p { class: "text-yellow-400 font-medium", "USD/TRY : {value:.4}" }
            } else if let Some(message) = error() {
                p { class: "text-red-500 font-medium", "{message}" }
            } else {
                p { class: "text-gray-400", "Loading exchange rate..." }
            }
        }
    }
}

/// Live gram-gold price in TRY.
#[component]
pub fn GoldPrice() -> Element {
    let mut price = use_signal(|| None::<f64>);
    let mut error = use_signal(|| None::<String>);

    use_future(move || async move {
        loop {
            match api::gold_price().await {
                Ok(response) => {
                    price.set(Some(response.gold_price_try));
                    error.set(None);
                }
                Err(err) => {
                    price.set(None);
                    error.set(Some(err.to_string()));
                }
            }

            #[cfg(feature = "web")]
            gloo_timers::future::TimeoutFuture::new(REFRESH_MS).await;
            #[cfg(not(feature = "web"))]
            break;
        }
    });

    rsx! {
        div {
            if let Some(value) = price() {
                p { class: "text-yellow-100 font-medium", "GRAM ALTIN: {value:.2} \u{20ba}" }
            } else if let Some(message) = error() {
                p { class: "text-red-500 font-medium", "{message}" }
            } else {
                p { class: "text-gray-400", "Loading gold price..." }
            }
        }
    }
}
