use super::model::{Catalog, Track};

/// The fixed ten-song set this player ships with.
///
/// Titles are shown verbatim; some read "Artist - Name", some the reverse.
/// Duration labels are hand-authored, not measured.
pub fn builtin() -> Catalog {
    let entries: [(&str, &str, &str); 10] = [
        ("Mike Laure - El Zapato", "2:45", "zapato"),
        ("Granito de Mostaza - Amén", "3:10", "mostaza"),
        ("Save Your Tears - The Weeknd", "3:36", "tears"),
        ("I'm a Goofy Goober - SpongeBob", "2:58", "goober"),
        ("Scatman (ski-ba-bop-ba-dop-bop) - Scatman John", "3:30", "scatman"),
        ("Quaoar - Camelia", "4:05", "quaoar"),
        ("He-Man Sings - 4 Non Blondes", "3:52", "heman"),
        ("Vitas - The 7th Element", "3:20", "vitas"),
        ("Morat - Cuando Nadie Ve", "3:40", "morat"),
        ("Somewhere Over the Rainbow - Israel Kamakawiwo'ole", "4:30", "rainbow"),
    ];

    Catalog::new(
        entries
            .into_iter()
            .map(|(title, duration_label, stem)| Track {
                title: title.to_string(),
                duration_label: duration_label.to_string(),
                artwork: stem.to_string(),
                audio: stem.to_string(),
                audio_path: None,
                artwork_path: None,
            })
            .collect(),
    )
}
