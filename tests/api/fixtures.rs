use fake::{
    Fake,
    faker::{lorem::en::Sentence, name::en::Name},
};
use serde_json::{Value, json};

pub fn fake_upload_form() -> Value {
    let title: String = Sentence(2..4).fake();

    json!({
        "title": title.trim_end_matches('.'),
        "description": Sentence(8..16).fake::<String>(),
        "author": Name().fake::<String>(),
        "artist": "",
        "type": "Manga",
        "status": "Completed",
        "coverUrl": "data:image/png;base64,iVBORw0KGgo=",
        "genres": ["Action", "Mystery"],
        "rating": 4.3
    })
}
