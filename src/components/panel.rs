// src/components/panel.rs

use serde::{Deserialize, Serialize};

use super::{Position, Rect, Size};

/// ドラッグできるパネルの識別子。画面には左と右の 2 枚だけ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Left,
    Right,
}

impl PanelId {
    pub const ALL: [PanelId; 2] = [PanelId::Left, PanelId::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Left => "left",
            PanelId::Right => "right",
        }
    }

    /// JS から渡される文字列 ("left" / "right") をパース。
    pub fn parse(value: &str) -> Option<PanelId> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(PanelId::Left),
            "right" => Some(PanelId::Right),
            _ => None,
        }
    }
}

/// 左右ペアで値を持つための小さな入れ物。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

impl<T> Pair<T> {
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, id: PanelId) -> &T {
        match id {
            PanelId::Left => &self.left,
            PanelId::Right => &self.right,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair { left: f(self.left), right: f(self.right) }
    }
}

/// マウント時に決まるパネルの情報 (ドラッグで変わらない部分)。
///
/// 現在位置はここには持たない。位置はパネルごとの `DragController` だけが持つ。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    /// 画像の URL
    pub src: String,
    /// マウント時の左上座標 (レイアウト結果)
    pub initial_position: Position,
    /// フィット後の表示サイズ。マウント後は変わらない。
    pub size: Size,
    /// パネルのローカル座標でのホットスポット
    pub hotspot: Option<Rect>,
    /// ホットスポットのリンク先 (新しいタブで開く)
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_id_roundtrips_through_str() {
        for id in PanelId::ALL {
            assert_eq!(PanelId::parse(id.as_str()), Some(id));
        }
        assert_eq!(PanelId::parse(" Right "), Some(PanelId::Right));
        assert_eq!(PanelId::parse("middle"), None);
    }

    #[test]
    fn pair_map_and_get() {
        let pair = Pair::new(2, 3).map(|v| v * 10);
        assert_eq!(*pair.get(PanelId::Left), 20);
        assert_eq!(*pair.get(PanelId::Right), 30);
    }
}
