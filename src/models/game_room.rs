use uuid::Uuid;

use crate::models::player::Player;

pub const BOARD_SIZE: i32 = 19;
const BOARD_CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// One isolated two-player match: board, turn state, and win detection.
///
/// The board is a flat row-major grid; cell values are 0 (empty), 1
/// (player 1), or 2 (player 2). All mutation goes through `place_stone`,
/// and a `Finished` room never mutates again.
pub struct GameRoom {
    room_id: String,
    player1: Player,
    player2: Player,
    status: GameStatus,
    turn_owner_id: i64,
    board: [u8; BOARD_CELLS],
}

impl GameRoom {
    /// Player 1 owns the first turn.
    pub fn new(player1: Player, player2: Player) -> Self {
        let turn_owner_id = player1.user_id;
        GameRoom {
            room_id: Uuid::new_v4().simple().to_string(),
            player1,
            player2,
            status: GameStatus::InProgress,
            turn_owner_id,
            board: [0; BOARD_CELLS],
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn_owner_id(&self) -> i64 {
        self.turn_owner_id
    }

    /// The opponent of `user_id`, or `None` if the id is not seated here.
    pub fn opponent_of(&self, user_id: i64) -> Option<&Player> {
        if user_id == self.player1.user_id {
            Some(&self.player2)
        } else if user_id == self.player2.user_id {
            Some(&self.player1)
        } else {
            None
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(self.board[(y * BOARD_SIZE + x) as usize])
    }

    /// Validates and applies one move. Returns `true` if the stone was
    /// placed; a rejected move leaves the room completely unchanged.
    ///
    /// A winning placement flips `status` to `Finished` and leaves the turn
    /// owner on the winner; otherwise the turn passes to the other player.
    pub fn place_stone(&mut self, player_id: i64, x: i32, y: i32) -> bool {
        if self.status == GameStatus::Finished {
            return false;
        }
        if player_id != self.turn_owner_id {
            return false;
        }
        if x < 0 || y < 0 || x >= BOARD_SIZE || y >= BOARD_SIZE {
            return false;
        }
        let index = (y * BOARD_SIZE + x) as usize;
        if self.board[index] != 0 {
            return false;
        }

        let player_number = if player_id == self.player1.user_id {
            1
        } else {
            2
        };
        self.board[index] = player_number;

        if self.is_winning_move(player_number, x, y) {
            self.status = GameStatus::Finished;
        } else {
            self.turn_owner_id = if self.turn_owner_id == self.player1.user_id {
                self.player2.user_id
            } else {
                self.player1.user_id
            };
        }
        true
    }

    /// Checks the four axes through the placed cell only; never a
    /// full-board scan. Five or more contiguous stones win.
    fn is_winning_move(&self, player_number: u8, x: i32, y: i32) -> bool {
        const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        for (dx, dy) in AXES {
            let count =
                1 + self.run_length(player_number, x, y, dx, dy)
                    + self.run_length(player_number, x, y, -dx, -dy);
            if count >= 5 {
                return true;
            }
        }
        false
    }

    /// Contiguous same-owner stones outward from (x, y), excluding the
    /// origin, stopping at a board edge or a non-matching cell.
    fn run_length(&self, player_number: u8, x: i32, y: i32, dx: i32, dy: i32) -> i32 {
        let mut count = 0;
        let mut cx = x + dx;
        let mut cy = y + dy;
        while self.cell(cx, cy) == Some(player_number) {
            count += 1;
            cx += dx;
            cy += dy;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_room() -> GameRoom {
        GameRoom::new(Player::new(1, "alice"), Player::new(2, "bob"))
    }

    #[test]
    fn test_room_id_uniqueness() {
        let room1 = new_room();
        let room2 = new_room();

        assert!(!room1.room_id().is_empty());
        assert_ne!(room1.room_id(), room2.room_id());
    }

    #[test]
    fn test_player1_owns_first_turn() {
        let room = new_room();
        assert_eq!(room.turn_owner_id(), 1);
        assert_eq!(room.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_rejects_move_out_of_turn() {
        let mut room = new_room();
        assert!(!room.place_stone(2, 0, 0));
        assert_eq!(room.cell(0, 0), Some(0));
        assert_eq!(room.turn_owner_id(), 1);
    }

    #[test]
    fn test_rejects_unknown_player() {
        let mut room = new_room();
        assert!(!room.place_stone(99, 0, 0));
        assert_eq!(room.cell(0, 0), Some(0));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut room = new_room();
        assert!(!room.place_stone(1, -1, 0));
        assert!(!room.place_stone(1, 0, -1));
        assert!(!room.place_stone(1, BOARD_SIZE, 0));
        assert!(!room.place_stone(1, 0, BOARD_SIZE));
        assert_eq!(room.turn_owner_id(), 1);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut room = new_room();
        assert!(room.place_stone(1, 9, 9));
        assert!(!room.place_stone(2, 9, 9));
        assert_eq!(room.cell(9, 9), Some(1));
        assert_eq!(room.turn_owner_id(), 2);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut room = new_room();
        assert!(room.place_stone(1, 3, 3));

        let board_before = room.board;
        let turn_before = room.turn_owner_id();

        // Wrong turn, out of bounds, and occupied, in sequence.
        assert!(!room.place_stone(1, 4, 4));
        assert!(!room.place_stone(2, 30, 30));
        assert!(!room.place_stone(2, 3, 3));

        assert_eq!(room.board, board_before);
        assert_eq!(room.turn_owner_id(), turn_before);
        assert_eq!(room.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_turn_alternates_on_each_move() {
        let mut room = new_room();
        assert!(room.place_stone(1, 0, 0));
        assert_eq!(room.turn_owner_id(), 2);
        assert!(room.place_stone(2, 1, 0));
        assert_eq!(room.turn_owner_id(), 1);
    }

    /// Alternates player 2's moves onto row 10 so no run forms there.
    fn play_horizontal_run(room: &mut GameRoom, length: i32) {
        for i in 0..length {
            assert!(room.place_stone(1, i, 0));
            if room.status() == GameStatus::Finished {
                return;
            }
            assert!(room.place_stone(2, i, 10));
        }
    }

    #[test]
    fn test_five_in_a_row_horizontal_wins() {
        let mut room = new_room();
        play_horizontal_run(&mut room, 5);
        assert_eq!(room.status(), GameStatus::Finished);
        // Winner keeps the turn marker.
        assert_eq!(room.turn_owner_id(), 1);
    }

    #[test]
    fn test_four_in_a_row_does_not_win() {
        let mut room = new_room();
        play_horizontal_run(&mut room, 4);
        assert_eq!(room.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_five_in_a_row_vertical_wins() {
        let mut room = new_room();
        for y in 0..5 {
            assert!(room.place_stone(1, 0, y));
            if room.status() == GameStatus::Finished {
                break;
            }
            assert!(room.place_stone(2, 10, y));
        }
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_five_in_a_row_diagonal_wins() {
        let mut room = new_room();
        for i in 0..5 {
            assert!(room.place_stone(1, i, i));
            if room.status() == GameStatus::Finished {
                break;
            }
            assert!(room.place_stone(2, 18 - i, i));
        }
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_five_in_a_row_anti_diagonal_wins() {
        let mut room = new_room();
        for i in 0..5 {
            assert!(room.place_stone(1, 10 - i, i));
            if room.status() == GameStatus::Finished {
                break;
            }
            assert!(room.place_stone(2, 18, i));
        }
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_gap_filling_completes_run() {
        let mut room = new_room();
        // 1 plays x = 0,1,3,4 on row 0, then fills the gap at x = 2.
        for x in [0, 1, 3, 4] {
            assert!(room.place_stone(1, x, 0));
            assert!(room.place_stone(2, x, 10));
        }
        assert!(room.place_stone(1, 2, 0));
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_overline_of_six_wins() {
        let mut room = new_room();
        // 1 plays x = 0,1,2 and 4,5 on row 0; placing x = 3 makes six.
        for x in [0, 1, 2, 4, 5] {
            assert!(room.place_stone(1, x, 0));
            assert!(room.place_stone(2, x, 10));
        }
        assert!(room.place_stone(1, 3, 0));
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_corner_truncation_never_false_wins() {
        let mut room = new_room();
        // A short run into the (0,0) corner: only 3 stones on each axis.
        assert!(room.place_stone(1, 0, 1));
        assert!(room.place_stone(2, 10, 10));
        assert!(room.place_stone(1, 0, 2));
        assert!(room.place_stone(2, 10, 11));
        assert!(room.place_stone(1, 0, 0));
        assert_eq!(room.status(), GameStatus::InProgress);
        assert_eq!(room.turn_owner_id(), 2);
    }

    #[test]
    fn test_win_touching_board_edge() {
        let mut room = new_room();
        // Vertical run along the rightmost column, ending at the corner.
        for y in 14..19 {
            assert!(room.place_stone(1, 18, y));
            if room.status() == GameStatus::Finished {
                break;
            }
            assert!(room.place_stone(2, 0, y));
        }
        assert_eq!(room.status(), GameStatus::Finished);
    }

    #[test]
    fn test_no_moves_after_finish() {
        let mut room = new_room();
        play_horizontal_run(&mut room, 5);
        assert_eq!(room.status(), GameStatus::Finished);

        let board_before = room.board;
        assert!(!room.place_stone(1, 10, 10));
        assert!(!room.place_stone(2, 10, 10));
        assert_eq!(room.board, board_before);
    }

    #[test]
    fn test_interleaved_off_turn_calls_are_rejected() {
        let mut room = new_room();
        // Player 1 builds (0,0)..(0,4); player 2 fires between every move
        // while it is still player 1's turn, plus one legal reply.
        for y in 0..5 {
            assert!(!room.place_stone(2, 5, y));
            assert!(room.place_stone(1, 0, y));
            if room.status() == GameStatus::Finished {
                break;
            }
            assert!(room.place_stone(2, 10, y));
            assert!(!room.place_stone(2, 11, y));
        }
        assert_eq!(room.status(), GameStatus::Finished);
        for y in 0..5 {
            assert_eq!(room.cell(0, y), Some(1));
            assert_eq!(room.cell(5, y), Some(0));
            assert_eq!(room.cell(11, y), Some(0));
        }
    }

    #[test]
    fn test_opponent_of() {
        let room = new_room();
        assert_eq!(room.opponent_of(1).unwrap().user_id, 2);
        assert_eq!(room.opponent_of(2).unwrap().user_id, 1);
        assert!(room.opponent_of(3).is_none());
    }
}
