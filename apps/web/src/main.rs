mod config;
mod dom;
mod fetch;

use std::cell::RefCell;
use std::rc::Rc;

use forecast_core::reading::TEST_TEMPERATURES;
use forecast_core::{render, Forecast, WeatherSource};
use log::{error, info, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement, MouseEvent};

use crate::config::{page_config, API_KEY_ATTRIBUTE, CITY_ATTRIBUTE, ENDPOINT_ATTRIBUTE};
use crate::dom::DomSurface;
use crate::fetch::BrowserWeatherSource;

type SharedForecast = Rc<RefCell<Forecast<DomSurface>>>;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        error!("no document to attach to");
        return;
    };

    if let Err(e) = when_document_loaded(&document, bootstrap) {
        error!("cannot wait for the page: {e:?}");
    }
}

/// Runs `action` once the DOM is parsed.
fn when_document_loaded(
    document: &Document,
    action: fn(&Document) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let run = move |document: &Document| {
        if let Err(e) = action(document) {
            error!("forecast page failed to start: {e:?}");
        }
    };

    if document.ready_state() != "loading" {
        run(document);
        return Ok(());
    }

    let loaded = document.clone();
    let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || run(&loaded)));
    document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bootstrap(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("page has no body"))?;
    let config = page_config(
        body.get_attribute(ENDPOINT_ATTRIBUTE),
        body.get_attribute(API_KEY_ATTRIBUTE),
        body.get_attribute(CITY_ATTRIBUTE),
    );
    let default_city = config.default_city.clone();
    let source = Rc::new(BrowserWeatherSource::new(config));

    let mut part1 = DomSurface::by_id(document, "weather-part1")?;
    let fixed = shared(Forecast::fixed(DomSurface::by_id(document, "weather-part2")?));
    let online = shared(Forecast::online(
        DomSurface::by_id(document, "weather-part3")?,
        default_city,
    ));
    let by_city = shared(Forecast::by_city(DomSurface::by_id(document, "weather-city")?));

    on_click(document, "btn-part1", {
        let source = source.clone();
        move || {
            info!("The button was clicked");
            render(&mut part1, &TEST_TEMPERATURES);
            spawn_reload(fixed.clone(), source.clone());
            spawn_reload(online.clone(), source.clone());
        }
    })?;

    let city_input: HtmlInputElement = document
        .get_element_by_id("query-city")
        .ok_or_else(|| JsValue::from_str("missing element #query-city"))?
        .dyn_into()?;

    on_click(document, "btn-city", move || {
        let name = city_input.value();
        info!("Query = {name:?}");
        by_city.borrow_mut().set_city(name);
        spawn_reload(by_city.clone(), source.clone());
    })
}

fn shared(forecast: Forecast<DomSurface>) -> SharedForecast {
    Rc::new(RefCell::new(forecast))
}

fn on_click<F>(document: &Document, id: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;

    let closure = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
        handler();
    }));
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Reloads without holding a borrow across the fetch, so a second click while
/// a request is pending is fine. The response applied last wins.
fn spawn_reload(forecast: SharedForecast, source: Rc<BrowserWeatherSource>) {
    spawn_local(async move {
        let pending = forecast.borrow().pending_query();
        let query = match pending {
            Ok(Some(query)) => query,
            Ok(None) => {
                forecast.borrow_mut().reload_baseline();
                return;
            }
            Err(e) => {
                warn!("cannot reload: {e}");
                return;
            }
        };

        match source.fetch(&query).await {
            Ok(response) => forecast.borrow_mut().apply_response(response),
            Err(e) => error!("reload for {:?} failed ({}): {e}", query.city, e.kind()),
        }
    });
}
