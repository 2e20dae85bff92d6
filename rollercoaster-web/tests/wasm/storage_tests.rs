use rollercoaster_core::{BadgeStore, KeyValueStorage, storage_key};
use rollercoaster_web::dom;
use rollercoaster_web::storage::WebStorage;
use wasm_bindgen_test::*;

fn fresh_storage() -> WebStorage {
    let storage = dom::local_storage().expect("localStorage available");
    storage.clear().expect("clear localStorage");
    WebStorage::new(storage)
}

#[wasm_bindgen_test]
fn web_storage_round_trips_entries() {
    let storage = fresh_storage();
    storage.set("plain", "value").expect("set");
    assert_eq!(storage.get("plain").expect("get"), Some("value".to_string()));
    assert_eq!(storage.keys().expect("keys"), vec!["plain".to_string()]);
    storage.remove("plain").expect("remove");
    assert_eq!(storage.get("plain").expect("get"), None);
}

#[wasm_bindgen_test]
fn saved_badges_survive_a_new_store() {
    let storage = fresh_storage();
    storage.set("rc.locale", "de").expect("set unrelated key");
    {
        let store = BadgeStore::live(storage.clone());
        store.save("quiet-victory", "finished the archive").expect("save");
    }
    assert_eq!(
        storage.get(&storage_key("quiet-victory")).expect("get"),
        Some("finished the archive".to_string())
    );

    let reloaded = BadgeStore::live(storage);
    let badges = reloaded.badges();
    assert_eq!(badges.len(), 1);
    assert_eq!(
        badges.get("quiet-victory").map(String::as_str),
        Some("finished the archive")
    );
}
