//! Palettes shipped with the editor.

use super::Palette;

const BUILTINS: &[(&str, &str)] = &[
    ("Vehicles", "🚙🚗🚒🚐🛻🏎🚚🚛🚜🏍🛵🚲🛴🚔🚑🚕🚎🚓🚘🛺🚖"),
    ("Sports", "🏈⚾️🏀⚽️🎾🏐🥏🏓⛳️🥅🥌🏂⛷🎳"),
    ("Music", "🎼🎤🎹🪘🥁🎺🪗🪕🎻"),
    (
        "Animals",
        "🐥🐣🐂🐄🐎🐖🐏🐑🦙🐐🐓🐁🐀🐒🦆🦅🦉🦇🐢🐍🦎🦖🦕🐅🐆🦓🦍🦧🦣🐘🦛🦏🐪🐫🦒🦘🦬🐃🦌🐕🐩🦮🐈🦤🦢🦩🕊🦝🦨🦡🦫🦦🦥🐿🦔",
    ),
    ("Animal Faces", "🐵🙈🙊🙉🐶🐱🐭🐹🐰🦊🐻🐼🐻‍❄️🐨🐯🦁🐮🐷🐸🐲"),
    ("Flora", "🌲🌴🌿☘️🍀🍁🍄🌾💐🌷🌹🥀🌺🌸🌼🌻"),
    ("Weather", "☀️🌤⛅️🌥☁️🌦🌧⛈🌩🌨❄️💨☔️💧💦🌊☂️🌫🌪"),
    ("COVID", "💉🦠😷🤧🤒"),
    (
        "Faces",
        "😀😃😄😁😆😅😂🤣🥲☺️😊😇🙂🙃😉😌😍🥰😘😗😙😚😋😛😝😜🤪🤨🧐🤓😎🥸🤩🥳😏😞😔😟😕🙁☹️😣😖😫😩🥺😢😭😤😠😡🤯😳🥶😥😓🤗🤔🤭🤫🤥😬🙄😯😧🥱😴🤮😷🤧🤒🤠",
    ),
];

/// The built-in palette list, with fresh ids.
pub fn builtin_palettes() -> Vec<Palette> {
    BUILTINS
        .iter()
        .map(|(name, emojis)| Palette::new(*name, emojis))
        .collect()
}

/// The palette the chooser's "New" action inserts.
pub fn math_palette() -> Palette {
    Palette::new("Math", "+−-×÷±")
}
