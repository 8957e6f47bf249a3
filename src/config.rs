// This file is part of the deep-chess-engine library.
// Copyright (C) 2026 The deep-chess-engine developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use crate::color::Color;

/// Settings applied when a [`Game`](crate::Game) is set up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Display name of the white player.
    ///
    /// Defaults to `"White"`.
    pub white_name: String,
    /// Defaults to `"Black"`.
    pub black_name: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            white_name: "White".to_owned(),
            black_name: "Black".to_owned(),
        }
    }
}

impl Config {
    pub fn name(&self, color: Color) -> &str {
        color.fold(&self.white_name, &self.black_name)
    }
}
