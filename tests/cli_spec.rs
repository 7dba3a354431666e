use std::io::Cursor;

use shelf::cli::App;
use shelf::models::{Games, Kind, Notes};
use shelf::persistence::{JsonFile, MemoryStore};
use shelf::store::Catalog;
use speculate2::speculate;

/// Runs a scripted session and returns the catalog plus everything printed.
fn session<K: Kind>(catalog: Catalog<K>, script: &str) -> (Catalog<K>, String) {
    let mut app = App::new(catalog, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    app.run().expect("session failed");
    let (catalog, output) = app.into_parts();
    (catalog, String::from_utf8(output).expect("output is utf-8"))
}

speculate! {
    describe "games menu" {
        before {
            let catalog = Catalog::<Games>::new(MemoryStore::new());
        }

        it "adds a game and a play then marks the play as played" {
            let script = "1\nChess\n5\nSteve Jackson\n\
                          6\n0\nround 1\n\
                          16\n\
                          9\n0\n0\ny\n\
                          0\n";
            let (catalog, output) = session(catalog, script);

            assert!(output.contains("Added Successfully (id 0)"));
            assert!(output.contains("Add Successful!"));
            assert!(output.contains("Total To-Be Played plays: 1"));
            assert!(output.contains("Chess: round 1"));
            assert!(output.contains("The play is currently To-Be Played...do you want to mark it as Played?"));
            assert!(output.ends_with("Goodbye!\n"));
            assert_eq!(catalog.count_pending_tasks(), 0);
        }

        it "reports invalid choices and stops at end of input" {
            let (_, output) = session(catalog, "42\n");
            assert!(output.contains("Invalid menu choice: 42"));
        }

        it "re-prompts when the choice is not a number" {
            let (_, output) = session(catalog, "list\n0\n");
            assert!(output.contains("Number expected - try again"));
            assert!(output.contains("Goodbye!"));
        }

        it "does not offer plays on a game saved for later" {
            let script = "1\nChess\n5\nSteve Jackson\n5\n0\n6\n0\n";
            let (catalog, output) = session(catalog, script);

            assert!(output.contains("Archive Successful!"));
            assert!(output.contains("No running games stored"));
            assert_eq!(catalog.find(0).unwrap().task_count(), 0);
        }

        it "refuses to list an empty catalog" {
            let (_, output) = session(catalog, "2\n0\n");
            assert!(output.contains("Option Invalid - No games stored in the system"));
        }

        it "updates play contents but keeps the completion state" {
            let script = "1\nChess\n5\nSteve Jackson\n\
                          6\n0\nround 1\n\
                          9\n0\n0\ny\n\
                          7\n0\n0\nfinal round\n\
                          0\n";
            let (catalog, output) = session(catalog, script);

            assert!(output.contains("Play contents successfully updated!"));
            let play = catalog.find(0).unwrap().find_task(0).unwrap();
            assert_eq!(play.contents, "final round");
            assert!(play.complete);
        }

        it "rejects a play id that does not exist" {
            let script = "1\nChess\n5\nSteve Jackson\n\
                          6\n0\nround 1\n\
                          8\n0\n3\n\
                          0\n";
            let (catalog, output) = session(catalog, script);

            assert!(output.contains("Invalid Play id"));
            assert_eq!(catalog.find(0).unwrap().task_count(), 1);
        }

        it "searches games by name" {
            let script = "1\nChess\n5\nSteve Jackson\n10\nCHE\n10\nrisk\n0\n";
            let (_, output) = session(catalog, script);

            assert!(output.contains("0: Chess, Rating(5)"));
            assert!(output.contains("No games were found"));
        }

        it "reports a failed load without leaving the menu" {
            let (_, output) = session(catalog, "20\n0\n");
            assert!(output.contains("Error reading from file"));
            assert!(output.contains("Goodbye!"));
        }
    }

    describe "persistence through the menu" {
        it "saves in one session and loads in the next" {
            let dir = tempfile::tempdir().expect("tempdir");
            let path = dir.path().join("games.json");

            let first = Catalog::<Games>::new(JsonFile::new(&path));
            let (_, output) = session(first, "1\nGloomhaven\n5\nCephalofair\n19\n0\n");
            assert!(output.contains("Saved 1 games"));

            let second = Catalog::<Games>::new(JsonFile::new(&path));
            let (catalog, output) = session(second, "20\n0\n");
            assert!(output.contains("Loaded 1 games from storage"));
            assert_eq!(catalog.find(0).unwrap().name, "Gloomhaven");
        }
    }

    describe "notes menu" {
        it "updates and deletes a note" {
            let catalog = Catalog::<Notes>::new(MemoryStore::new());
            let script = "1\nShopping\n1\nHome\n\
                          3\n1\n0\nGroceries\n2\nErrands\n\
                          4\n1\n0\n\
                          0\n";
            let (catalog, output) = session(catalog, script);

            assert!(output.contains("Update Successful"));
            assert!(output.contains("0: Groceries, Priority(2), Category(Errands), Archived(N)"));
            assert!(output.contains("Delete Successful!"));
            assert_eq!(catalog.count(), 0);
        }
    }
}
