use super::model::Track;

/// The tracks shipped with the player, in playlist order.
pub fn builtin_tracks() -> Vec<Track> {
    vec![
        Track::new(
            1,
            "Avaz Nemishi",
            "Shadmehr Aghili",
            180,
            "/img/shadmehr2.jpg",
            "/music/Shadmehr Aghili - Avaz Nemishi [320].mp3",
            "from-purple-500 to-pink-500",
        ),
        Track::new(
            2,
            "Nagoo-Na",
            "Amir Tataloo",
            210,
            "/img/tataloo.jpg",
            "/music/Nagoo-Na-Amir-Tataloo.mp3",
            "from-blue-500 to-cyan-500",
        ),
        Track::new(
            3,
            "Vasleh",
            "Talk Down - Sami Beigi ",
            195,
            "/img/sami.jpg",
            "/music/Talk20Down202620Sami20Beigi20-20Vasleh202832029.mp3",
            "from-orange-500 to-red-500",
        ),
        Track::new(
            4,
            "Hesse Khoobieh",
            "Shadmehr Aghili",
            300,
            "/img/shadmehr.jpg",
            "/music/Shadmehr Aghili - Hesse Khoobieh [320].mp3",
            "from-indigo-500 to-purple-500",
        ),
        Track::new(
            5,
            "Negaranetam",
            "Asef Aria",
            310,
            "/img/Asef.jpg",
            "/music/Asef Aria - Negaranetam.mp3",
            "from-indigo-500 to-purple-500",
        ),
    ]
}
