//! Project README files and the `.env` file

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

pub const ENV_FILE: &str = "VITE_API_URL=http://api.exemple.com\n";

const ADVANCED_BODY: &str = r#"Voici un ensemble d’outils, bonnes pratiques et composants avancés que tu peux ajouter à ton projet **à la demande**. Rien n’est installé automatiquement, mais tout est prêt à être copié-collé.

---

## 🧠 1. Authentification globale avec Zustand + Persist

Créer un fichier `src/stores/authStore.js` :

```js
import { create } from 'zustand'
import { persist } from 'zustand/middleware'

export const useAuthStore = create(
  persist(
    (set) => ({
      user: null,
      hasHydrated: false,
      login: (data) => set({ user: data }),
      logout: () => set({ user: null }),
      setHasHydrated: (state) => set({ hasHydrated: state }),
    }),
    {
      name: 'auth-storage',
      onRehydrateStorage: () => (state) => {
        state.setHasHydrated(true)
      },
    }
  )
)
```

---

## ⚙️ 2. API + axios

Créer un fichier `src/api/axios.js` :

```js
import axios from 'axios'

const instance = axios.create({
  baseURL: import.meta.env.VITE_API_URL,
  headers: {
    'Content-Type': 'application/json',
  },
})

export default instance
```

Puis un service dans `src/services/postService.js` :

```js
import axios from '../api/axios'

export const fetchPosts = async (page = 1, limit = 10) => {
  const res = await axios.get('/posts', {
    params: { _page: page, _limit: limit },
  })
  return res.data
}
```

---

## 🔐 3. Protection de route avec RequireAuth

Brancher `src/routes/RequireAuth` sur le store :

```jsx
import { Navigate, useLocation } from 'react-router-dom'
import { useAuthStore } from '../stores/authStore'

export default function RequireAuth({ children, role }) {
  const user = useAuthStore((s) => s.user)
  const hasHydrated = useAuthStore((s) => s.hasHydrated)
  const location = useLocation()

  if (!hasHydrated) return null
  if (!user) return <Navigate to="/login" state={{ from: location }} replace />
  if (role && user.role !== role) return <Navigate to="/unauthorized" replace />
  return children
}
```

---

## 🔁 4. React Query (data fetching + mutation)

```bash
npm install @tanstack/react-query
```

Créer un provider `src/providers/QueryProvider.jsx` :

```jsx
import { QueryClient, QueryClientProvider } from '@tanstack/react-query'
const queryClient = new QueryClient()

export default function QueryProvider({ children }) {
  return <QueryClientProvider client={queryClient}>{children}</QueryClientProvider>
}
```

Et l’utiliser dans `App` :

```jsx
import QueryProvider from './providers/QueryProvider'

function App() {
  return (
    <QueryProvider>
      <AppRoutes />
    </QueryProvider>
  )
}
```

---

## 💡 5. Optimistic Update (React Query)

```js
onMutate: async (newItem) => {
  await queryClient.cancelQueries(['posts'])
  const previous = queryClient.getQueryData(['posts'])
  queryClient.setQueryData(['posts'], (old) => [...(old || []), newItem])
  return { previous }
},
onError: (err, newItem, context) => {
  queryClient.setQueryData(['posts'], context.previous)
},
onSuccess: () => {
  queryClient.invalidateQueries(['posts'])
}
```

---

## 📄 6. Documentation automatique avec JSDoc

```bash
npm install --save-dev jsdoc
```

Créer un fichier `jsdoc.json` :

```json
{
  "source": {
    "include": ["src"],
    "includePattern": ".jsx?$"
  },
  "opts": {
    "destination": "./docs",
    "recurse": true
  }
}
```

Ajouter `"doc": "jsdoc -c jsdoc.json"` aux scripts du `package.json`, puis lancer `npm run doc`.

---

Tu peux copier-coller chaque partie dans ton projet selon ce que tu veux activer ✅
"#;

fn readme(config: &RunConfig) -> String {
    let name = config.project_name.as_str();
    let typescript = if config.typescript() { " + TypeScript" } else { "" };
    let tailwind = if config.tailwind { "- Tailwind CSS\n" } else { "" };
    format!(
        r#"# 🚀 {name}

Projet généré automatiquement avec react-starter 💻

## 📦 Stack utilisée

- React{typescript}
- Vite
- SCSS (architecture modulaire)
{tailwind}- React Router DOM
- ESLint + Prettier

---

## ▶️ Lancer le projet

```bash
npm install
npm run dev
```

---

## 📁 Structure du projet

```
src/
├── assets/          → Images, SVG, polices
├── components/      → Composants réutilisables
├── constants/       → Constantes globales (ex: routes)
├── hooks/           → Custom Hooks
├── layouts/         → Layouts globaux avec Header/Footer
├── pages/           → Pages principales (home, notfound…)
├── routes/          → Système de navigation
├── services/        → Appels API, intégrations
├── stores/          → État global
├── styles/          → SCSS avec variables, reset, mixins
├── utils/           → Fonctions utilitaires
```

---

## 🧹 Scripts disponibles

| Script          | Description                  |
|-----------------|------------------------------|
| `npm run dev`   | Lance le serveur Vite        |
| `npm run lint`  | Lint le projet avec ESLint   |
"#
    )
}

fn advanced_readme(config: &RunConfig) -> String {
    format!(
        "# 🚀 {} (Avancé)\n\n{}",
        config.project_name.as_str(),
        ADVANCED_BODY
    )
}

pub fn readme_templates(config: &RunConfig) -> Vec<Template> {
    vec![
        Template::new("README.md", readme(config)),
        Template::new("README-advanced.md", advanced_readme(config)),
    ]
}

pub fn env_templates() -> Vec<Template> {
    vec![Template::new(".env", ENV_FILE)]
}

pub async fn emit_env(root: &Path) -> Result<()> {
    write_all(root, &env_templates()).await?;
    Ok(())
}

pub async fn emit_readme(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &readme_templates(config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectName;

    fn config(typescript: bool, tailwind: bool) -> RunConfig {
        RunConfig::new(ProjectName::parse("shop").unwrap(), typescript, tailwind)
    }

    #[test]
    fn test_readme_heading_uses_project_name() {
        assert!(readme(&config(false, false)).starts_with("# 🚀 shop\n"));
        assert!(advanced_readme(&config(false, false)).starts_with("# 🚀 shop (Avancé)"));
    }

    #[test]
    fn test_typescript_label_is_conditional() {
        assert!(readme(&config(true, false)).contains("- React + TypeScript\n"));
        assert!(readme(&config(false, false)).contains("- React\n"));
        assert!(!readme(&config(false, false)).contains("TypeScript"));
    }

    #[test]
    fn test_tailwind_listed_only_when_enabled() {
        assert!(readme(&config(false, true)).contains("- Tailwind CSS\n"));
        assert!(!readme(&config(false, false)).contains("Tailwind"));
    }
}
