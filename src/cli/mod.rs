//! Interactive menu over a [`Catalog`].
//!
//! The [`App`] owns the catalog for the whole session and talks to the user
//! through a [`Prompter`], so it runs the same against a terminal or a
//! scripted buffer.

mod input;
pub mod menu;

pub use input::Prompter;

use std::io::{self, BufRead, Write};

use crate::models::*;
use crate::store::Catalog;

use menu::capitalize;

pub struct App<K: Kind, R, W> {
    catalog: Catalog<K>,
    io: Prompter<R, W>,
}

impl<K: Kind, R: BufRead, W: Write> App<K, R, W> {
    pub fn new(catalog: Catalog<K>, input: R, output: W) -> Self {
        Self {
            catalog,
            io: Prompter::new(input, output),
        }
    }

    /// Hands back the catalog and the output writer once the session is over.
    pub fn into_parts(self) -> (Catalog<K>, W) {
        (self.catalog, self.io.into_output())
    }

    /// Loads the catalog, reporting the outcome to the user.
    pub fn load(&mut self) -> io::Result<()> {
        match self.catalog.load() {
            Ok(()) => self.io.say(format!(
                "Loaded {} {} from storage",
                self.catalog.count(),
                K::RECORDS
            )),
            Err(e) => {
                tracing::error!("Load failed: {}", e);
                self.io.say(format!("Error reading from file: {}", e))
            }
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("Input closed, leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu once and carries out the choice. `false` means exit.
    fn step(&mut self) -> io::Result<bool> {
        let choice = self.io.read_int(&menu::main_menu::<K>())?;
        tracing::debug!(choice, "Menu choice");

        match choice {
            1 => self.add_record()?,
            2 => self.list_records()?,
            3 => self.update_record()?,
            4 => self.delete_record()?,
            5 => self.archive_record()?,
            6 => self.add_task()?,
            7 => self.update_task_contents()?,
            8 => self.delete_task()?,
            9 => self.toggle_task()?,
            10 => self.search_records()?,
            15 => self.search_tasks()?,
            16 => self.list_pending_tasks()?,
            19 => self.save()?,
            20 => self.load()?,
            0 => {
                self.io.say("Goodbye!")?;
                return Ok(false);
            }
            other => self.io.say(format!("Invalid menu choice: {}", other))?,
        }
        Ok(true)
    }

    // ============================================================
    // Record menu
    // ============================================================

    fn read_record_input(&mut self) -> io::Result<RecordInput> {
        let name = self
            .io
            .read_line(&format!("Enter a name for the {}: ", K::RECORD))?;
        let rating = self
            .io
            .read_int(&format!("Enter a {}: ", K::RATING_LABEL.to_lowercase()))?;
        let category = self
            .io
            .read_line(&format!("Enter a {}: ", K::CATEGORY_LABEL.to_lowercase()))?;
        Ok(RecordInput {
            name,
            rating,
            category,
        })
    }

    fn add_record(&mut self) -> io::Result<()> {
        let input = self.read_record_input()?;
        match self.catalog.add(input) {
            Some(id) => self.io.say(format!("Added Successfully (id {})", id)),
            None => self.io.say("Add Failed"),
        }
    }

    fn list_records(&mut self) -> io::Result<()> {
        if self.catalog.count() == 0 {
            return self
                .io
                .say(format!("Option Invalid - No {} stored in the system", K::RECORDS));
        }

        let listing = match self.io.read_int(&menu::list_menu::<K>())? {
            1 => self.catalog.list_all(),
            2 => self.catalog.list_active(),
            3 => self.catalog.list_archived(),
            other => format!("Invalid option entered: {}", other),
        };
        self.io.say(listing)
    }

    fn update_record(&mut self) -> io::Result<()> {
        self.list_records()?;
        if self.catalog.count() == 0 {
            return Ok(());
        }

        let id = self
            .io
            .read_id(&format!("Enter the id of the {} to update: ", K::RECORD))?;
        if self.catalog.find(id).is_none() {
            return self
                .io
                .say(format!("There are no {} for this id number", K::RECORDS));
        }

        let input = self.read_record_input()?;
        if self.catalog.update(id, input) {
            self.io.say("Update Successful")
        } else {
            self.io.say("Update Failed")
        }
    }

    fn delete_record(&mut self) -> io::Result<()> {
        self.list_records()?;
        if self.catalog.count() == 0 {
            return Ok(());
        }

        let id = self
            .io
            .read_id(&format!("Enter the id of the {} to delete: ", K::RECORD))?;
        if self.catalog.delete(id) {
            self.io.say("Delete Successful!")
        } else {
            self.io.say("Delete wasn't Successful!")
        }
    }

    fn archive_record(&mut self) -> io::Result<()> {
        self.io.say(self.catalog.list_active())?;
        if self.catalog.count_active() == 0 {
            return Ok(());
        }

        let id = self.io.read_id(&format!(
            "Enter the id of the {} to mark as {}: ",
            K::RECORD,
            K::ARCHIVED_LABEL.to_lowercase()
        ))?;
        if self.catalog.archive(id) {
            self.io.say("Archive Successful!")
        } else {
            self.io.say("Archive wasn't Successful!")
        }
    }

    // ============================================================
    // Task menu (active records only)
    // ============================================================

    /// Lists active records and asks for one. `None` when nothing usable was
    /// chosen; the reason has already been printed.
    fn choose_active_record(&mut self) -> io::Result<Option<u32>> {
        self.io.say(self.catalog.list_active())?;
        if self.catalog.count_active() == 0 {
            return Ok(None);
        }

        let id = self
            .io
            .read_id(&format!("\nEnter the id of the {}: ", K::RECORD))?;
        match self.catalog.find(id) {
            Some(record) if record.archived => {
                self.io.say(format!(
                    "{} is NOT active, it is {}",
                    capitalize(K::RECORD),
                    K::ARCHIVED_LABEL
                ))?;
                Ok(None)
            }
            Some(_) => Ok(Some(id)),
            None => {
                self.io
                    .say(format!("{} id is not valid", capitalize(K::RECORD)))?;
                Ok(None)
            }
        }
    }

    /// Lists the tasks of a record and asks for one.
    fn choose_task(&mut self, record_id: u32) -> io::Result<Option<u32>> {
        let Some(record) = self.catalog.find(record_id) else {
            return Ok(None);
        };
        if record.task_count() == 0 {
            self.io
                .say(format!("No {} for chosen {}", K::TASKS, K::RECORD))?;
            return Ok(None);
        }

        let listing = record.list_tasks();
        self.io.say(listing)?;
        let task_id = self
            .io
            .read_id(&format!("\nEnter the id of the {}: ", K::TASK))?;

        let exists = self
            .catalog
            .find(record_id)
            .is_some_and(|record| record.find_task(task_id).is_some());
        if exists {
            Ok(Some(task_id))
        } else {
            self.io
                .say(format!("Invalid {} id", capitalize(K::TASK)))?;
            Ok(None)
        }
    }

    fn add_task(&mut self) -> io::Result<()> {
        let Some(record_id) = self.choose_active_record()? else {
            return Ok(());
        };

        let contents = self
            .io
            .read_line(&format!("\t {} Contents: ", capitalize(K::TASK)))?;
        let added = self
            .catalog
            .find_mut(record_id)
            .and_then(|record| record.add_task(TaskInput::pending(contents)));
        match added {
            Some(_) => self.io.say("Add Successful!"),
            None => self.io.say("Add wasn't Successful!"),
        }
    }

    /// Replaces the contents of a task, keeping its completion state.
    fn update_task_contents(&mut self) -> io::Result<()> {
        let Some(record_id) = self.choose_active_record()? else {
            return Ok(());
        };
        let Some(task_id) = self.choose_task(record_id)? else {
            return Ok(());
        };

        let contents = self.io.read_line("Enter new contents: ")?;
        let updated = self.catalog.find_mut(record_id).is_some_and(|record| {
            let complete = record
                .find_task(task_id)
                .is_some_and(|task| task.complete);
            record.update_task(task_id, TaskInput { contents, complete })
        });

        if updated {
            self.io
                .say(format!("{} contents successfully updated!", capitalize(K::TASK)))
        } else {
            self.io
                .say(format!("{} contents weren't updated!", capitalize(K::TASK)))
        }
    }

    fn delete_task(&mut self) -> io::Result<()> {
        let Some(record_id) = self.choose_active_record()? else {
            return Ok(());
        };
        let Some(task_id) = self.choose_task(record_id)? else {
            return Ok(());
        };

        let deleted = self
            .catalog
            .find_mut(record_id)
            .is_some_and(|record| record.delete_task(task_id));
        if deleted {
            self.io.say("Delete Successful!")
        } else {
            self.io.say("Delete wasn't Successful!")
        }
    }

    fn toggle_task(&mut self) -> io::Result<()> {
        let Some(record_id) = self.choose_active_record()? else {
            return Ok(());
        };
        let Some(task_id) = self.choose_task(record_id)? else {
            return Ok(());
        };

        let complete = self
            .catalog
            .find(record_id)
            .and_then(|record| record.find_task(task_id))
            .is_some_and(|task| task.complete);
        let (current, target) = if complete {
            (K::COMPLETE_LABEL, K::PENDING_LABEL)
        } else {
            (K::PENDING_LABEL, K::COMPLETE_LABEL)
        };

        let question = format!(
            "The {} is currently {}...do you want to mark it as {}? ",
            K::TASK,
            current,
            target
        );
        if self.io.confirm(&question)? {
            if let Some(record) = self.catalog.find_mut(record_id) {
                record.toggle_task(task_id);
            }
        }
        Ok(())
    }

    // ============================================================
    // Reports
    // ============================================================

    fn search_records(&mut self) -> io::Result<()> {
        let query = self.io.read_line("Enter the name to search by: ")?;
        let results = self.catalog.search_by_name(&query);
        if results.is_empty() {
            self.io.say(format!("No {} were found", K::RECORDS))
        } else {
            self.io.say(results)
        }
    }

    fn search_tasks(&mut self) -> io::Result<()> {
        let query = self
            .io
            .read_line(&format!("Enter the {} contents to search by: ", K::TASK))?;
        self.io.say(self.catalog.search_tasks(&query))
    }

    fn list_pending_tasks(&mut self) -> io::Result<()> {
        let pending = self.catalog.count_pending_tasks();
        if pending > 0 {
            self.io
                .say(format!("Total {} {}: {}", K::PENDING_LABEL, K::TASKS, pending))?;
        }
        self.io.say(self.catalog.list_pending_tasks())
    }

    // ============================================================
    // Persistence
    // ============================================================

    fn save(&mut self) -> io::Result<()> {
        match self.catalog.save() {
            Ok(()) => self
                .io
                .say(format!("Saved {} {}", self.catalog.count(), K::RECORDS)),
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                self.io.say(format!("Error writing to file: {}", e))
            }
        }
    }
}
